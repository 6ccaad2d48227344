//! Transform component
//!
//! Position, layer, rotation angle and uniform scale of one entity. The
//! transform is plain data owned by its entity. Colliders read it during
//! sync but never hold on to it.

use crate::physics::collision::{Point, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spatial state of one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    position: Point,
    layer: u32,
    angle: f64,
    scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            layer: 0,
            angle: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Transform at `position` on `layer` with no rotation and unit scale
    pub fn new(position: Point, layer: u32) -> Self {
        Self {
            position,
            layer,
            ..Default::default()
        }
    }

    /// Builder pattern: set the rotation angle in degrees
    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.angle = degrees;
        self
    }

    /// Builder pattern: set the scale, clamped at zero
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale.max(0.0);
        self
    }

    /// Current position
    pub fn position(&self) -> Point {
        self.position
    }

    /// Collision and draw layer
    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// Rotation in degrees, counter-clockwise
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Uniform scale factor
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }

    /// Moves the position by `delta` and the layer by `delta_layer`
    ///
    /// The layer saturates at zero.
    pub fn move_by(&mut self, delta: Vector, delta_layer: i32) {
        self.position.translate(delta);
        self.layer = self.layer.saturating_add_signed(delta_layer);
    }

    /// Places the entity at `position`
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Adds `delta_degrees` to the angle
    pub fn rotate(&mut self, delta_degrees: f64) {
        self.angle += delta_degrees;
    }

    /// Adds `delta` to the scale, clamping at zero
    ///
    /// The change is additive: to reach a target scale pass the difference
    /// between it and [`Transform::scale_factor`].
    pub fn scale(&mut self, delta: f64) {
        self.scale = (self.scale + delta).max(0.0);
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} {:.2}",
            self.position, self.layer, self.angle, self.scale
        )
    }
}

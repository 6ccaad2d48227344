//! Circle collider

use super::primitives::{Point, Vector};
use super::shape::ColliderError;
use std::fmt;

/// A circular collision shape
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCollider {
    center: Point,
    radius: f64,
}

impl CircleCollider {
    /// Creates a circle, rejecting non-positive radii and non-finite centers
    pub fn new(center: Point, radius: f64) -> Result<Self, ColliderError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(ColliderError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(ColliderError::InvalidCenter(center));
        }
        Ok(Self { center, radius })
    }

    /// Center of the circle
    pub fn center(&self) -> Point {
        self.center
    }

    /// Current radius (may reach zero after scaling down)
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// For a circle the centroid is its center
    pub fn centroid(&self) -> Point {
        self.center
    }

    /// Moves the center by `v`
    pub fn translate(&mut self, v: Vector) {
        self.center.translate(v);
    }

    /// Multiplies the radius by `factor`, flooring at zero
    pub fn scale(&mut self, factor: f64) {
        self.radius = (self.radius * factor).max(0.0);
    }

    /// Circle-circle overlap: centers no farther apart than the sum of radii
    pub fn overlaps_circle(&self, other: &CircleCollider) -> bool {
        self.center.distance(other.center) <= self.radius + other.radius
    }
}

impl fmt::Display for CircleCollider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.center, self.radius)
    }
}

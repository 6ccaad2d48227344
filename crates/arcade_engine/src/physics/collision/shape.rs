//! Collider abstraction over circles and polygons
//!
//! A [`Collider`] holds its geometry in world space and keeps the angle and
//! scale it last applied, so that syncing to a [`Transform`] only applies the
//! difference since the previous frame.

use super::circle::CircleCollider;
use super::polygon::PolygonCollider;
use super::primitives::{GeometryError, Point, Vector};
use crate::ecs::components::transform::Transform;
use std::fmt;
use thiserror::Error;

/// Errors raised when building a collider or accessing its geometry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColliderError {
    /// Circle radius must be positive and finite
    #[error("Invalid circle radius {0}: must be positive and finite")]
    InvalidRadius(f64),

    /// Circle center must have finite coordinates
    #[error("Invalid circle center {0}")]
    InvalidCenter(Point),

    /// Polygons need at least three vertices
    #[error("Polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// A vertex coordinate is NaN or infinite
    #[error("Polygon vertex {0} is not finite")]
    NonFiniteVertex(Point),

    /// Two consecutive vertices coincide
    #[error("Degenerate polygon edge: {0}")]
    DegenerateEdge(#[from] GeometryError),

    /// Three consecutive vertices lie on one line
    #[error("Polygon vertex {index} is collinear with its neighbours")]
    CollinearVertices {
        /// Index of the middle vertex of the collinear triple
        index: usize,
    },

    /// Two non-adjacent edges intersect
    #[error("Polygon edges {first} and {second} intersect")]
    SelfIntersecting {
        /// Index of the first edge
        first: usize,
        /// Index of the second edge
        second: usize,
    },

    /// Vertex index past the end of the polygon
    #[error("Vertex index {index} out of range for polygon with {len} vertices")]
    VertexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of vertices
        len: usize,
    },
}

/// Variant tag of a collider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderKind {
    /// Circle collider
    Circle,
    /// Polygon collider
    Polygon,
}

/// The geometry of a collider
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Circle given by center and radius
    Circle(CircleCollider),
    /// Simple polygon given by its vertices
    Polygon(PolygonCollider),
}

impl Geometry {
    /// Whether two geometries overlap
    ///
    /// Touching counts as overlapping.
    pub fn overlaps(&self, other: &Geometry) -> bool {
        match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => a.overlaps_circle(b),
            (Self::Circle(circle), Self::Polygon(polygon))
            | (Self::Polygon(polygon), Self::Circle(circle)) => polygon.overlaps_circle(circle),
            (Self::Polygon(a), Self::Polygon(b)) => a.overlaps_polygon(b),
        }
    }
}

/// A collision shape owned by one entity
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    geometry: Geometry,
    last_angle: f64,
    last_scale: f64,
}

impl Collider {
    /// Wraps geometry with a fresh sync baseline (angle 0, scale 1)
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            last_angle: 0.0,
            last_scale: 1.0,
        }
    }

    /// Creates a validated circle collider
    pub fn circle(center: Point, radius: f64) -> Result<Self, ColliderError> {
        Ok(Self::new(Geometry::Circle(CircleCollider::new(center, radius)?)))
    }

    /// Creates a validated polygon collider
    pub fn polygon(vertices: Vec<Point>) -> Result<Self, ColliderError> {
        Ok(Self::new(Geometry::Polygon(PolygonCollider::new(vertices)?)))
    }

    /// Current geometry
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Which variant this collider is
    pub fn kind(&self) -> ColliderKind {
        match self.geometry {
            Geometry::Circle(_) => ColliderKind::Circle,
            Geometry::Polygon(_) => ColliderKind::Polygon,
        }
    }

    /// Geometric center
    pub fn centroid(&self) -> Point {
        match &self.geometry {
            Geometry::Circle(circle) => circle.centroid(),
            Geometry::Polygon(polygon) => polygon.centroid(),
        }
    }

    /// Moves the geometry by `v`
    pub fn translate(&mut self, v: Vector) {
        match &mut self.geometry {
            Geometry::Circle(circle) => circle.translate(v),
            Geometry::Polygon(polygon) => polygon.translate(v),
        }
    }

    /// Rotates about the centroid; circles are rotation invariant
    pub fn rotate(&mut self, degrees: f64) {
        if let Geometry::Polygon(polygon) = &mut self.geometry {
            polygon.rotate(degrees);
        }
    }

    /// Scales about the centroid by `factor`
    pub fn scale(&mut self, factor: f64) {
        match &mut self.geometry {
            Geometry::Circle(circle) => circle.scale(factor),
            Geometry::Polygon(polygon) => polygon.scale(factor),
        }
    }

    /// Brings the geometry in line with `transform`
    ///
    /// Applies the rotation delta, then the scale ratio, then moves the
    /// centroid onto the transform's position.
    pub fn sync_to_transform(&mut self, transform: &Transform) {
        let angle = transform.angle();
        if angle != self.last_angle {
            self.rotate(angle - self.last_angle);
            self.last_angle = angle;
        }

        let scale = transform.scale_factor();
        if scale != self.last_scale {
            let ratio = scale / self.last_scale;
            if ratio > 0.0 && ratio.is_finite() {
                self.scale(ratio);
                self.last_scale = scale;
            } else {
                log::warn!(
                    "Skipping collider scale sync from {} to {scale}",
                    self.last_scale
                );
            }
        }

        let offset = transform.position() - self.centroid();
        if !offset.is_zero() {
            self.translate(offset);
        }
    }

    /// Whether this collider overlaps `other`
    pub fn overlaps(&self, other: &Collider) -> bool {
        self.geometry.overlaps(&other.geometry)
    }
}

impl fmt::Display for Collider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.geometry {
            Geometry::Circle(circle) => write!(f, "Circle {circle}"),
            Geometry::Polygon(polygon) => write!(f, "Polygon {polygon}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Collider {
        Collider::polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_kind() {
        assert_eq!(Collider::circle(Point::ORIGIN, 1.0).unwrap().kind(), ColliderKind::Circle);
        assert_eq!(unit_square().kind(), ColliderKind::Polygon);
    }

    #[test]
    fn test_construction_errors_propagate() {
        assert_eq!(
            Collider::circle(Point::ORIGIN, -1.0),
            Err(ColliderError::InvalidRadius(-1.0))
        );
        assert_eq!(
            Collider::polygon(vec![Point::ORIGIN]),
            Err(ColliderError::TooFewVertices(1))
        );
    }

    #[test]
    fn test_mixed_overlap_is_symmetric() {
        let square = unit_square();
        let touching = Collider::circle(Point::new(1.5, 0.5), 0.5).unwrap();
        let apart = Collider::circle(Point::new(3.0, 3.0), 0.5).unwrap();
        assert!(square.overlaps(&touching));
        assert!(touching.overlaps(&square));
        assert!(!square.overlaps(&apart));
        assert!(!apart.overlaps(&square));
    }

    #[test]
    fn test_rotate_is_noop_for_circle() {
        let mut circle = Collider::circle(Point::new(2.0, 2.0), 1.0).unwrap();
        let before = circle.clone();
        circle.rotate(45.0);
        assert_eq!(circle, before);
    }

    #[test]
    fn test_sync_moves_centroid_to_position() {
        let mut collider = unit_square();
        let transform = Transform::new(Point::new(10.0, -4.0), 0);
        collider.sync_to_transform(&transform);
        let c = collider.centroid();
        assert_relative_eq!(c.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sync_applies_deltas_only() {
        let mut collider = unit_square();
        let mut transform = Transform::new(Point::new(0.5, 0.5), 0);
        transform.scale(1.0);
        collider.sync_to_transform(&transform);
        // Scale went 1 -> 2: edge length 2.
        let Geometry::Polygon(polygon) = collider.geometry() else {
            panic!("expected a polygon");
        };
        assert_relative_eq!(polygon.signed_area().abs(), 4.0, epsilon = 1e-9);

        // Syncing again with an unchanged transform must not rescale.
        collider.sync_to_transform(&transform);
        let Geometry::Polygon(polygon) = collider.geometry() else {
            panic!("expected a polygon");
        };
        assert_relative_eq!(polygon.signed_area().abs(), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sync_rotation_round_trip() {
        let mut collider = unit_square();
        let original = collider.clone();
        let mut transform = Transform::new(Point::new(0.5, 0.5), 0);
        transform.rotate(30.0);
        collider.sync_to_transform(&transform);
        transform.rotate(-30.0);
        collider.sync_to_transform(&transform);

        let (Geometry::Polygon(after), Geometry::Polygon(before)) =
            (collider.geometry(), original.geometry())
        else {
            panic!("expected polygons");
        };
        for (a, b) in after.vertices().iter().zip(before.vertices()) {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sync_skips_zero_scale() {
        let mut collider = Collider::circle(Point::ORIGIN, 2.0).unwrap();
        let mut transform = Transform::new(Point::ORIGIN, 0);
        transform.scale(-1.0);
        assert_eq!(transform.scale_factor(), 0.0);
        collider.sync_to_transform(&transform);
        let Geometry::Circle(circle) = collider.geometry() else {
            panic!("expected a circle");
        };
        assert_eq!(circle.radius(), 2.0);

        // Growing back from zero scales relative to the last applied scale.
        transform.scale(3.0);
        collider.sync_to_transform(&transform);
        let Geometry::Circle(circle) = collider.geometry() else {
            panic!("expected a circle");
        };
        assert_relative_eq!(circle.radius(), 6.0);
    }

    #[test]
    fn test_display() {
        let circle = Collider::circle(Point::new(1.0, 2.0), 3.0).unwrap();
        assert_eq!(circle.to_string(), "Circle (1.00,2.00) 3.00");
    }
}

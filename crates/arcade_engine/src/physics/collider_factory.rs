//! Builds colliders from flat numeric descriptors
//!
//! Descriptor format:
//!
//! - `[cx, cy, r]` is a circle
//! - `[w, h]` is the rectangle `(0,0) (0,h) (w,h) (w,0)`
//! - any other even-length list is a polygon of `len / 2` vertices given as
//!   consecutive `x, y` pairs

use crate::physics::collision::{Collider, ColliderError, Point};
use thiserror::Error;

/// Errors raised while turning a descriptor into a collider
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescriptorError {
    /// The descriptor has too few values to describe any shape
    #[error("Collider descriptor needs at least 2 values, got {0}")]
    TooShort(usize),

    /// A polygon descriptor must consist of whole `x, y` pairs
    #[error("Polygon descriptor has an odd number of values ({0})")]
    OddLength(usize),

    /// The descriptor is well formed but describes an invalid shape
    #[error("Invalid collider: {0}")]
    Collider(#[from] ColliderError),
}

/// Builds a collider from a flat descriptor
pub fn collider_from_descriptor(values: &[f64]) -> Result<Collider, DescriptorError> {
    match *values {
        [] | [_] => Err(DescriptorError::TooShort(values.len())),
        [cx, cy, radius] => Ok(Collider::circle(Point::new(cx, cy), radius)?),
        [w, h] => Ok(Collider::polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, h),
            Point::new(w, h),
            Point::new(w, 0.0),
        ])?),
        _ if values.len() % 2 == 1 => Err(DescriptorError::OddLength(values.len())),
        _ => {
            let vertices = values
                .chunks_exact(2)
                .map(|pair| Point::new(pair[0], pair[1]))
                .collect();
            Ok(Collider::polygon(vertices)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision::{ColliderKind, Geometry};

    #[test]
    fn test_circle_descriptor() {
        let collider = collider_from_descriptor(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(collider.kind(), ColliderKind::Circle);
        assert_eq!(collider.centroid(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_rectangle_shorthand() {
        let collider = collider_from_descriptor(&[4.0, 2.0]).unwrap();
        let Geometry::Polygon(polygon) = collider.geometry() else {
            panic!("expected a polygon");
        };
        assert_eq!(
            polygon.vertices(),
            &[
                Point::new(0.0, 0.0),
                Point::new(0.0, 2.0),
                Point::new(4.0, 2.0),
                Point::new(4.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_vertex_list_descriptor() {
        let collider = collider_from_descriptor(&[0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0]).unwrap();
        let Geometry::Polygon(polygon) = collider.geometry() else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.vertex_count(), 4);
    }

    #[test]
    fn test_triangle_descriptor() {
        let collider = collider_from_descriptor(&[0.0, 0.0, 3.0, 0.0, 0.0, 3.0]).unwrap();
        assert_eq!(collider.kind(), ColliderKind::Polygon);
    }

    #[test]
    fn test_malformed_descriptors() {
        assert_eq!(collider_from_descriptor(&[]), Err(DescriptorError::TooShort(0)));
        assert_eq!(collider_from_descriptor(&[5.0]), Err(DescriptorError::TooShort(1)));
        assert_eq!(
            collider_from_descriptor(&[0.0, 0.0, 1.0, 1.0, 2.0]),
            Err(DescriptorError::OddLength(5))
        );
        assert_eq!(
            collider_from_descriptor(&[0.0, 0.0, 1.0, 1.0]),
            Err(DescriptorError::Collider(ColliderError::TooFewVertices(2)))
        );
    }

    #[test]
    fn test_invalid_shapes_are_reported() {
        assert_eq!(
            collider_from_descriptor(&[0.0, 0.0, 0.0]),
            Err(DescriptorError::Collider(ColliderError::InvalidRadius(0.0)))
        );
        // Zero width collapses the rectangle onto one edge.
        assert!(matches!(
            collider_from_descriptor(&[0.0, 2.0]),
            Err(DescriptorError::Collider(_))
        ));
        // Bowtie
        assert!(matches!(
            collider_from_descriptor(&[0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0]),
            Err(DescriptorError::Collider(ColliderError::SelfIntersecting { .. }))
        ));
    }
}

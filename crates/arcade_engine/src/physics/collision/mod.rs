//! Narrow-phase collision detection in 2D
//!
//! # Module Organization
//!
//! - [`primitives`] - Points, vectors and segments with orientation tests
//! - [`circle`] - Circle collider
//! - [`polygon`] - Simple polygon collider with point containment
//! - [`gjk`] - Polygon-polygon overlap by simplex search
//! - [`shape`] - The [`Collider`] wrapper and its overlap dispatch

pub mod circle;
pub mod gjk;
pub mod polygon;
pub mod primitives;
pub mod shape;

pub use circle::CircleCollider;
pub use polygon::{point_in_polygon, PolygonCollider};
pub use primitives::{orientation, GeometryError, Point, Segment, Vector};
pub use shape::{Collider, ColliderError, ColliderKind, Geometry};

//! Physics module for collision detection
//!
//! Narrow-phase 2D collision between circles and polygons, a factory that
//! builds colliders from flat numeric descriptors, and the brute-force
//! pairwise collision map the engine runs every frame.

pub mod collider_factory;
pub mod collision;
pub mod collision_system;

pub use collider_factory::{collider_from_descriptor, DescriptorError};
pub use collision::{Collider, ColliderError, ColliderKind, Geometry, Point, Segment, Vector};
pub use collision_system::{CollisionCandidate, CollisionMap, CollisionPair};

//! Components owned by every game object

pub mod lifecycle;
pub mod transform;

pub use lifecycle::EntityState;
pub use transform::Transform;

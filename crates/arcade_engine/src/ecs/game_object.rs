//! Game objects
//!
//! A [`GameObject`] bundles the parts of one entity: name, transform,
//! collider, visual shape and behaviour. It is owned by the
//! [`World`](super::world::World) once spawned.

use super::behaviour::Behaviour;
use super::components::{EntityState, Transform};
use crate::physics::collision::Collider;
use crate::physics::collision_system::layers_collide;
use crate::render::shape::Shape;
use std::fmt;

/// One entity of the game
pub struct GameObject {
    name: String,
    transform: Transform,
    collider: Collider,
    shape: Shape,
    pub(super) behaviour: Option<Box<dyn Behaviour>>,
    pub(super) state: EntityState,
}

impl GameObject {
    /// Assembles an entity and places its collider on the transform
    pub fn new(
        name: impl Into<String>,
        transform: Transform,
        mut collider: Collider,
        shape: Shape,
        behaviour: impl Behaviour + 'static,
    ) -> Self {
        collider.sync_to_transform(&transform);
        Self {
            name: name.into(),
            transform,
            collider,
            shape,
            behaviour: Some(Box::new(behaviour)),
            state: EntityState::Enabled,
        }
    }

    /// Name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable transform
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Collider, as of the last sync
    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    /// Visual shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Mutable visual shape
    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    /// Lifecycle state while owned by a world
    pub fn state(&self) -> EntityState {
        self.state
    }

    /// Brings the collider in line with the transform
    pub fn sync_collider(&mut self) {
        self.collider.sync_to_transform(&self.transform);
    }

    /// Whether this entity collides with `other`
    ///
    /// Entities on different layers never collide.
    pub fn is_colliding(&self, other: &GameObject) -> bool {
        layers_collide(self.transform.layer(), other.transform.layer())
            && self.collider.overlaps(&other.collider)
    }
}

impl fmt::Debug for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameObject")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("collider", &self.collider)
            .field("shape", &self.shape)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.name, self.transform, self.collider)
    }
}

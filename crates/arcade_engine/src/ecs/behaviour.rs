//! Behaviour capability of a game object
//!
//! A [`Behaviour`] supplies the per-entity logic. Every callback has an
//! empty default so implementors only write the ones they need. Callbacks
//! receive a [`BehaviourContext`] that can mutate the entity's own transform
//! and shape, read other entities, and queue lifecycle requests. Requests
//! are applied by the engine once the current frame's collision pass is
//! done, never while the entity lists are being walked.

use super::components::{EntityState, Transform};
use super::entity::EntityId;
use super::game_object::GameObject;
use super::world::{Command, World};
use crate::input::InputEvent;
use crate::physics::collision::Collider;
use crate::render::shape::Shape;
use std::time::Duration;

/// Per-entity logic invoked by the engine
#[allow(unused_variables)]
pub trait Behaviour {
    /// Called once when the entity is spawned, before `on_enable`
    fn on_init(&mut self, ctx: &mut BehaviourContext<'_>) {}

    /// Called when the entity enters the enabled set
    fn on_enable(&mut self, ctx: &mut BehaviourContext<'_>) {}

    /// Called when the entity leaves the enabled set for the disabled one
    fn on_disable(&mut self, ctx: &mut BehaviourContext<'_>) {}

    /// Called once right before the entity is removed from the engine
    fn on_destroy(&mut self, ctx: &mut BehaviourContext<'_>) {}

    /// Called every frame with the previous frame's duration and the held keys
    fn on_update(&mut self, ctx: &mut BehaviourContext<'_>, delta: Duration, input: &InputEvent) {}

    /// Called at most once per frame with everything the entity collided with
    fn on_collision(&mut self, ctx: &mut BehaviourContext<'_>, others: &[EntityId]) {}
}

/// Behaviour that does nothing, for static scenery
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBehaviour;

impl Behaviour for NoBehaviour {}

/// What a behaviour callback may touch
pub struct BehaviourContext<'a> {
    id: EntityId,
    world: &'a mut World,
}

impl<'a> BehaviourContext<'a> {
    pub(crate) fn new(id: EntityId, world: &'a mut World) -> Self {
        Self { id, world }
    }

    // The entity stays in storage for the whole callback: removals are
    // queued and only applied after it returns.
    fn object(&self) -> &GameObject {
        &self.world.objects[self.id]
    }

    fn object_mut(&mut self) -> &mut GameObject {
        &mut self.world.objects[self.id]
    }

    /// Id of the entity this behaviour belongs to
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Name of the owning entity
    pub fn name(&self) -> &str {
        self.object().name()
    }

    /// Transform of the owning entity
    pub fn transform(&self) -> &Transform {
        self.object().transform()
    }

    /// Mutable transform of the owning entity
    ///
    /// The collider follows at the next sync.
    pub fn transform_mut(&mut self) -> &mut Transform {
        self.object_mut().transform_mut()
    }

    /// Collider of the owning entity
    pub fn collider(&self) -> &Collider {
        self.object().collider()
    }

    /// Shape of the owning entity
    pub fn shape(&self) -> &Shape {
        self.object().shape()
    }

    /// Mutable shape of the owning entity
    pub fn shape_mut(&mut self) -> &mut Shape {
        self.object_mut().shape_mut()
    }

    /// Read access to any live entity
    pub fn get(&self, id: EntityId) -> Option<&GameObject> {
        self.world.get(id)
    }

    /// Lifecycle state of any entity
    pub fn state_of(&self, id: EntityId) -> EntityState {
        self.world.state(id)
    }

    /// Adds a new entity; it is first updated on the next frame
    pub fn spawn(&mut self, object: GameObject) -> EntityId {
        self.world.insert_pending(object)
    }

    /// Requests that `id` be enabled
    pub fn enable(&mut self, id: EntityId) {
        self.world.queue(Command::Enable(id));
    }

    /// Requests that `id` be disabled
    pub fn disable(&mut self, id: EntityId) {
        self.world.queue(Command::Disable(id));
    }

    /// Requests that `id` be destroyed
    pub fn destroy(&mut self, id: EntityId) {
        self.world.queue(Command::Destroy(id));
    }

    /// Requests that the owning entity be disabled
    pub fn disable_self(&mut self) {
        self.disable(self.id);
    }

    /// Requests that the owning entity be destroyed
    pub fn destroy_self(&mut self) {
        self.destroy(self.id);
    }

    /// Asks the engine to stop after the current frame
    pub fn stop_engine(&mut self) {
        self.world.request_stop();
    }
}

//! World holding every game object
//!
//! Objects live in a generational slot map. Two ordered lists record which
//! ones are enabled and which are disabled; a destroyed object is removed
//! from storage altogether.
//!
//! Lifecycle changes go through a command queue. Outside a frame the public
//! methods apply them at once. Inside a frame, behaviours only queue them,
//! and the engine applies the queue after the collision pass, so the lists
//! never change while they are being walked.

use super::behaviour::{Behaviour, BehaviourContext};
use super::components::EntityState;
use super::entity::EntityId;
use super::game_object::GameObject;
use slotmap::SlotMap;
use std::collections::{HashSet, VecDeque};

/// A lifecycle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Enter the enabled list for the first time, running `on_init` and `on_enable`
    Spawn(EntityId),
    /// Move from disabled to enabled
    Enable(EntityId),
    /// Move from enabled to disabled
    Disable(EntityId),
    /// Remove for good
    Destroy(EntityId),
}

/// ECS World containing all game objects
#[derive(Debug, Default)]
pub struct World {
    pub(super) objects: SlotMap<EntityId, GameObject>,
    enabled: Vec<EntityId>,
    disabled: Vec<EntityId>,
    pending: VecDeque<Command>,
    leaving: HashSet<EntityId>,
    stop_requested: bool,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object and enables it
    pub fn spawn(&mut self, object: GameObject) -> EntityId {
        let id = self.insert_pending(object);
        self.flush();
        id
    }

    /// Enables `id` if it is disabled
    pub fn enable(&mut self, id: EntityId) {
        self.queue(Command::Enable(id));
        self.flush();
    }

    /// Disables `id` if it is enabled
    pub fn disable(&mut self, id: EntityId) {
        self.queue(Command::Disable(id));
        self.flush();
    }

    /// Destroys `id` unless it is already gone
    pub fn destroy(&mut self, id: EntityId) {
        self.queue(Command::Destroy(id));
        self.flush();
    }

    /// Lifecycle state of `id`; ids no longer stored report `Destroyed`
    pub fn state(&self, id: EntityId) -> EntityState {
        self.objects
            .get(id)
            .map_or(EntityState::Destroyed, GameObject::state)
    }

    /// Object behind `id`
    pub fn get(&self, id: EntityId) -> Option<&GameObject> {
        self.objects.get(id)
    }

    /// Mutable object behind `id`
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut GameObject> {
        self.objects.get_mut(id)
    }

    /// Enabled ids in the order they were enabled
    pub fn enabled(&self) -> &[EntityId] {
        &self.enabled
    }

    /// Disabled ids in the order they were disabled
    pub fn disabled(&self) -> &[EntityId] {
        &self.disabled
    }

    /// Number of stored objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when no object is stored
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// First stored object with the given name
    pub fn find_by_name(&self, name: &str) -> Option<EntityId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name() == name)
            .map(|(id, _)| id)
    }

    /// Whether the frame loop should still visit `id` this frame
    ///
    /// False once a disable or destroy has been requested for it.
    pub fn is_active(&self, id: EntityId) -> bool {
        self.state(id).is_active() && !self.leaving.contains(&id)
    }

    /// Whether requests are waiting to be applied
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub(crate) fn insert_pending(&mut self, object: GameObject) -> EntityId {
        let id = self.objects.insert(object);
        self.pending.push_back(Command::Spawn(id));
        id
    }

    pub(crate) fn queue(&mut self, command: Command) {
        if let Command::Disable(id) | Command::Destroy(id) = command {
            self.leaving.insert(id);
        }
        self.pending.push_back(command);
    }

    pub(crate) fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    pub(crate) fn take_stop_request(&mut self) -> bool {
        std::mem::take(&mut self.stop_requested)
    }

    /// Applies queued requests, including any raised by the callbacks they fire
    pub fn flush(&mut self) {
        while let Some(command) = self.pending.pop_front() {
            self.apply(command);
        }
        self.leaving.clear();
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Spawn(id) => {
                if !self.objects.contains_key(id) {
                    return;
                }
                self.enabled.push(id);
                log::debug!("Spawned {}", self.describe(id));
                self.invoke(id, |behaviour, ctx| behaviour.on_init(ctx));
                self.invoke(id, |behaviour, ctx| behaviour.on_enable(ctx));
            }
            Command::Enable(id) => {
                if self.state(id) != EntityState::Disabled {
                    return;
                }
                self.disabled.retain(|&other| other != id);
                self.enabled.push(id);
                self.set_state(id, EntityState::Enabled);
                log::debug!("Enabled {}", self.describe(id));
                self.invoke(id, |behaviour, ctx| behaviour.on_enable(ctx));
            }
            Command::Disable(id) => {
                if self.state(id) != EntityState::Enabled {
                    return;
                }
                self.enabled.retain(|&other| other != id);
                self.disabled.push(id);
                self.set_state(id, EntityState::Disabled);
                log::debug!("Disabled {}", self.describe(id));
                self.invoke(id, |behaviour, ctx| behaviour.on_disable(ctx));
            }
            Command::Destroy(id) => {
                if self.state(id) == EntityState::Destroyed {
                    return;
                }
                self.enabled.retain(|&other| other != id);
                self.disabled.retain(|&other| other != id);
                log::debug!("Destroying {}", self.describe(id));
                self.invoke(id, |behaviour, ctx| behaviour.on_destroy(ctx));
                self.objects.remove(id);
            }
        }
    }

    fn set_state(&mut self, id: EntityId, state: EntityState) {
        if let Some(object) = self.objects.get_mut(id) {
            object.state = state;
        }
    }

    fn describe(&self, id: EntityId) -> String {
        self.objects
            .get(id)
            .map_or_else(|| format!("{id:?}"), |object| format!("'{}'", object.name()))
    }

    /// Runs one behaviour callback for `id`
    ///
    /// The behaviour is taken out of its object for the duration of the call
    /// so the context can borrow the world.
    pub(crate) fn invoke<F>(&mut self, id: EntityId, callback: F)
    where
        F: FnOnce(&mut dyn Behaviour, &mut BehaviourContext<'_>),
    {
        let Some(mut behaviour) = self.objects.get_mut(id).and_then(|o| o.behaviour.take()) else {
            return;
        };
        callback(behaviour.as_mut(), &mut BehaviourContext::new(id, self));
        if let Some(object) = self.objects.get_mut(id) {
            object.behaviour = Some(behaviour);
        }
    }
}

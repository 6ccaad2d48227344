//! Entities and their lifecycle
//!
//! Game objects are stored in a [`World`] under generational [`EntityId`]s
//! and carry a [`Behaviour`] that the engine calls back every frame.

pub mod behaviour;
pub mod components;
pub mod entity;
pub mod game_object;
pub mod world;

pub use behaviour::{Behaviour, BehaviourContext, NoBehaviour};
pub use components::{EntityState, Transform};
pub use entity::EntityId;
pub use game_object::GameObject;
pub use world::{Command, World};

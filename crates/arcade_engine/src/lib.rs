//! # Arcade Engine
//!
//! A minimal 2D game engine core: a fixed-step entity loop and narrow-phase
//! collision detection between circles and polygons.
//!
//! ## Features
//!
//! - **Collision**: circle and simple-polygon colliders, polygon overlap by
//!   simplex search over the Minkowski difference
//! - **Entities**: game objects with a transform, collider, visual shape and
//!   behaviour, enabled, disabled or destroyed through a command queue
//! - **Frame loop**: update, collider sync, pairwise collision map, render
//!   in layer order
//! - **Configuration**: TOML or RON files through serde
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arcade_engine::prelude::*;
//!
//! struct Drift;
//!
//! impl Behaviour for Drift {
//!     fn on_update(&mut self, ctx: &mut BehaviourContext<'_>, _delta: Duration, _input: &InputEvent) {
//!         ctx.transform_mut().move_by(Vector::new(1.0, 0.0), 0);
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Engine::new(EngineConfig::default(), HeadlessUi::new());
//!     let collider = collider_from_descriptor(&[0.0, 0.0, 8.0])?;
//!     engine.spawn(GameObject::new("rock", Transform::default(), collider, Shape::empty(), Drift));
//!     engine.run()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod render;
pub mod ui;

mod engine;

pub use engine::{Engine, EngineConfig, EngineError, StopHandle};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        ecs::{Behaviour, BehaviourContext, EntityId, EntityState, GameObject, NoBehaviour, Transform},
        foundation::time::FrameStats,
        input::{InputEvent, InputManager, KeyCode},
        physics::{
            collider_from_descriptor, Collider, ColliderError, DescriptorError, Point, Vector,
        },
        render::{Shape, ShapeError},
        ui::{GameUi, HeadlessUi},
        Engine, EngineConfig, EngineError, StopHandle,
    };
    pub use std::time::Duration;
}

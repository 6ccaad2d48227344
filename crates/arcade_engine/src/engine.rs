//! Core engine implementation
//!
//! The engine owns the [`World`] and a presentation layer and drives the
//! frame loop:
//!
//! 1. take the input snapshot
//! 2. update every enabled object and sync its collider
//! 3. build the pairwise collision map and notify each colliding object once
//! 4. apply lifecycle requests queued during the frame
//! 5. render the enabled objects by ascending layer
//! 6. sleep for the configured delay and clear released keys
//!
//! Steps 2 and 3 walk the enabled list as it was when the frame started.

use crate::config::{Config, ConfigError};
use crate::ecs::{EntityId, EntityState, GameObject, World};
use crate::foundation::time::{FrameStats, FrameTimer};
use crate::physics::collision_system::{CollisionCandidate, CollisionMap};
use crate::ui::{GameUi, HeadlessUi};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Sleep between frames in milliseconds; zero disables sleeping
    pub frame_delay_ms: u64,

    /// Stop after this many frames
    pub max_frames: Option<u64>,

    /// Ask the presentation layer to outline colliders
    pub show_colliders: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: 13,
            max_frames: None,
            show_colliders: false,
        }
    }
}

impl Config for EngineConfig {}

impl EngineConfig {
    /// Target inter-frame delay
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// The loop already ran to completion on this instance
    #[error("Engine already ran and stopped; create a new engine to run again")]
    AlreadyStopped,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Clears the running flag from anywhere, including other threads
#[derive(Debug, Clone)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl StopHandle {
    /// Request engine shutdown after the current frame
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Idle,
    Running,
    Stopped,
}

/// Main engine struct
pub struct Engine<U: GameUi = HeadlessUi> {
    config: EngineConfig,
    world: World,
    ui: U,
    timer: FrameTimer,
    collisions: CollisionMap<EntityId>,
    running: Arc<AtomicBool>,
    run_state: RunState,
}

impl<U: GameUi> Engine<U> {
    /// Create a new engine instance
    pub fn new(config: EngineConfig, mut ui: U) -> Self {
        ui.show_colliders(config.show_colliders);
        Self {
            config,
            world: World::new(),
            ui,
            timer: FrameTimer::new(),
            collisions: CollisionMap::build(&[]),
            running: Arc::new(AtomicBool::new(false)),
            run_state: RunState::Idle,
        }
    }

    /// Create an engine from a TOML or RON configuration file
    pub fn from_config_file(path: impl AsRef<Path>, ui: U) -> Result<Self, EngineError> {
        let config = EngineConfig::load_or_default(path)?;
        Ok(Self::new(config, ui))
    }

    /// Run frames until stopped
    ///
    /// Returns once the running flag is cleared (by [`Engine::stop`], a
    /// [`StopHandle`] or a behaviour) or `max_frames` is reached. The current
    /// frame always completes. An engine runs at most once.
    pub fn run(&mut self) -> Result<FrameStats, EngineError> {
        if self.run_state == RunState::Stopped {
            return Err(EngineError::AlreadyStopped);
        }

        log::info!(
            "Starting main loop with {} objects ({} ms frame delay)",
            self.world.len(),
            self.config.frame_delay_ms
        );
        self.run_state = RunState::Running;
        self.running.store(true, Ordering::SeqCst);

        let mut frames = 0u64;
        while self.running.load(Ordering::SeqCst) {
            self.step();
            frames += 1;
            if self.config.max_frames.is_some_and(|max| frames >= max) {
                self.stop();
            }
        }

        self.run_state = RunState::Stopped;
        let stats = self.timer.stats();
        log::info!(
            "Main loop stopped after {} frames ({:.1} fps average)",
            stats.frame_count,
            stats.average_fps()
        );
        Ok(stats)
    }

    /// Run exactly one frame
    pub fn step(&mut self) {
        let delta = self.timer.begin_frame();
        let input = self.ui.input();
        let snapshot = self.world.enabled().to_vec();

        for &id in &snapshot {
            if !self.world.is_active(id) {
                continue;
            }
            self.world
                .invoke(id, |behaviour, ctx| behaviour.on_update(ctx, delta, &input));
            if let Some(object) = self.world.get_mut(id) {
                object.sync_collider();
            }
        }

        let collisions = self.detect_collisions(&snapshot);
        for (id, others) in collisions.iter() {
            if self.world.is_active(id) {
                self.world
                    .invoke(id, |behaviour, ctx| behaviour.on_collision(ctx, others));
            }
        }
        self.collisions = collisions;

        self.world.flush();

        let mut visible: Vec<&GameObject> = self
            .world
            .enabled()
            .iter()
            .filter_map(|&id| self.world.get(id))
            .collect();
        visible.sort_by_key(|object| object.transform().layer());
        self.ui.render(&visible);

        let delay = self.config.frame_delay();
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.ui.clear_released();
        self.timer.end_frame();

        if self.world.take_stop_request() {
            log::info!("Stop requested by a behaviour");
            self.stop();
        }
        log::trace!(
            "Frame {} done: {} enabled, {} colliding",
            self.timer.stats().frame_count,
            self.world.enabled().len(),
            self.collisions.len()
        );
    }

    fn detect_collisions(&self, snapshot: &[EntityId]) -> CollisionMap<EntityId> {
        let candidates: Vec<_> = snapshot
            .iter()
            .filter(|&&id| self.world.is_active(id))
            .filter_map(|&id| {
                self.world.get(id).map(|object| CollisionCandidate {
                    key: id,
                    layer: object.transform().layer(),
                    collider: object.collider(),
                })
            })
            .collect();
        CollisionMap::build(&candidates)
    }

    /// Request engine shutdown after the current frame
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Handle that stops the engine from elsewhere
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Whether the loop is currently running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Adds an object and enables it
    pub fn spawn(&mut self, object: GameObject) -> EntityId {
        self.world.spawn(object)
    }

    /// Enables `id` if it is disabled
    pub fn enable(&mut self, id: EntityId) {
        self.world.enable(id);
    }

    /// Disables `id` if it is enabled
    pub fn disable(&mut self, id: EntityId) {
        self.world.disable(id);
    }

    /// Destroys `id`
    pub fn destroy(&mut self, id: EntityId) {
        self.world.destroy(id);
    }

    /// Lifecycle state of `id`
    pub fn state(&self, id: EntityId) -> EntityState {
        self.world.state(id)
    }

    /// Object behind `id`
    pub fn get(&self, id: EntityId) -> Option<&GameObject> {
        self.world.get(id)
    }

    /// What `id` collided with during the last frame
    pub fn collisions(&self, id: EntityId) -> &[EntityId] {
        self.collisions.colliding_with(id)
    }

    /// Full collision map of the last frame
    pub fn collision_map(&self) -> &CollisionMap<EntityId> {
        &self.collisions
    }

    /// Get the world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get mutable access to the world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get the presentation layer
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Get mutable access to the presentation layer
    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frame timing so far
    pub fn stats(&self) -> FrameStats {
        self.timer.stats()
    }
}

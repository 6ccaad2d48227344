//! Turns a [`SceneConfig`] into game objects

use crate::behaviours::{PlayerControl, Rock};
use crate::config::{ObjectConfig, SceneConfig};
use arcade_engine::prelude::*;
use arcade_engine::ui::GameUi;

/// Builds the object described by `config`
pub fn build_object(config: &ObjectConfig) -> Result<GameObject, DescriptorError> {
    let collider = collider_from_descriptor(&config.collider)?;
    let shape = Shape::new(config.frames.clone(), Point::ORIGIN);
    let transform = config.transform();
    let object = match config.controls {
        Some(scheme) => GameObject::new(
            config.name.as_str(),
            transform,
            collider,
            shape,
            PlayerControl::new(scheme),
        ),
        None if config.spin != 0.0 => GameObject::new(
            config.name.as_str(),
            transform,
            collider,
            shape,
            Rock::new(config.spin),
        ),
        None => GameObject::new(config.name.as_str(), transform, collider, shape, NoBehaviour),
    };
    Ok(object)
}

/// Spawns every valid object of `scene` and returns their ids
///
/// Objects whose collider cannot be built are skipped with a warning.
pub fn populate<U: GameUi>(engine: &mut Engine<U>, scene: &SceneConfig) -> Vec<EntityId> {
    let mut spawned = Vec::with_capacity(scene.objects.len());
    for config in &scene.objects {
        match build_object(config) {
            Ok(object) => spawned.push(engine.spawn(object)),
            Err(e) => log::warn!("Skipping '{}': {}", config.name, e),
        }
    }
    spawned
}

//! Scene configuration
//!
//! A scene lists the objects to spawn at start-up and, because the demo
//! runs without a window, a script of key presses to replay.

use arcade_engine::config::{Config, Deserialize, Serialize};
use arcade_engine::prelude::{KeyCode, Point, Transform};

/// Everything needed to populate the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Objects in spawn order
    pub objects: Vec<ObjectConfig>,

    /// Key events replayed by the console UI
    pub input_script: Vec<ScriptedKey>,
}

impl Config for SceneConfig {}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            objects: vec![
                ObjectConfig {
                    name: "ship".to_string(),
                    position: Point::new(0.0, 0.0),
                    collider: vec![0.0, 0.0, 0.0, 8.0, 6.0, 4.0],
                    frames: vec!["ship".to_string()],
                    controls: Some(ControlScheme::default()),
                    ..ObjectConfig::default()
                },
                ObjectConfig {
                    name: "rock".to_string(),
                    position: Point::new(40.0, 0.0),
                    collider: vec![0.0, 0.0, 10.0],
                    frames: vec!["rock_a".to_string(), "rock_b".to_string()],
                    spin: 90.0,
                    ..ObjectConfig::default()
                },
                ObjectConfig {
                    name: "starfield".to_string(),
                    position: Point::new(40.0, 0.0),
                    layer: 1,
                    collider: vec![200.0, 200.0],
                    frames: vec!["stars".to_string()],
                    ..ObjectConfig::default()
                },
            ],
            input_script: vec![
                ScriptedKey { frame: 1, key: KeyCode::Right, pressed: true },
                ScriptedKey { frame: 150, key: KeyCode::Right, pressed: false },
            ],
        }
    }
}

/// One object of the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    /// Display name
    pub name: String,

    /// World position of the collider centroid
    pub position: Point,

    /// Collision and draw layer
    pub layer: u32,

    /// Initial rotation in degrees
    pub angle: f64,

    /// Initial scale factor
    pub scale: f64,

    /// Collider descriptor: `[cx, cy, r]`, `[w, h]` or a flat vertex list
    pub collider: Vec<f64>,

    /// Frame asset keys
    pub frames: Vec<String>,

    /// Player controls, if the object is steerable
    pub controls: Option<ControlScheme>,

    /// Constant rotation speed in degrees per second
    pub spin: f64,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: Point::ORIGIN,
            layer: 0,
            angle: 0.0,
            scale: 1.0,
            collider: Vec::new(),
            frames: Vec::new(),
            controls: None,
            spin: 0.0,
        }
    }
}

impl ObjectConfig {
    /// Starting transform for this object
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.layer)
            .with_angle(self.angle)
            .with_scale(self.scale)
    }
}

/// Keys that steer an object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlScheme {
    /// Move towards +y
    pub up: KeyCode,
    /// Move towards -y
    pub down: KeyCode,
    /// Move towards -x
    pub left: KeyCode,
    /// Move towards +x
    pub right: KeyCode,
    /// Units per second
    pub speed: f64,
}

impl Default for ControlScheme {
    fn default() -> Self {
        Self {
            up: KeyCode::Up,
            down: KeyCode::Down,
            left: KeyCode::Left,
            right: KeyCode::Right,
            speed: 20.0,
        }
    }
}

/// A key press or release at a given frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedKey {
    /// Frame number, counting from 1
    pub frame: u64,
    /// Key
    pub key: KeyCode,
    /// Press when true, release when false
    pub pressed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_engine::config::ConfigFormat;
    use arcade_engine::prelude::collider_from_descriptor;

    #[test]
    fn test_default_scene_builds() {
        let scene = SceneConfig::default();
        assert_eq!(scene.objects.len(), 3);
        for object in &scene.objects {
            assert!(collider_from_descriptor(&object.collider).is_ok(), "{}", object.name);
        }
    }

    #[test]
    fn test_object_defaults_fill_missing_fields() {
        let scene = SceneConfig::from_str_as(
            "(objects: [(name: \"rock\", collider: [0.0, 0.0, 3.0])])",
            ConfigFormat::Ron,
        )
        .unwrap();
        let rock = &scene.objects[0];
        assert_eq!(rock.scale, 1.0);
        assert_eq!(rock.controls, None);
        assert!(scene.input_script.is_empty());
    }

    #[test]
    fn test_controls_from_toml() {
        let text = r#"
            [[objects]]
            name = "ship"
            collider = [4.0, 4.0]

            [objects.position]
            x = 1.0
            y = 2.0

            [objects.controls]
            left = "A"
            right = "D"
            speed = 5.0
        "#;
        let scene = SceneConfig::from_str_as(text, ConfigFormat::Toml).unwrap();
        let controls = scene.objects[0].controls.unwrap();
        assert_eq!(controls.left, KeyCode::A);
        assert_eq!(controls.right, KeyCode::D);
        assert_eq!(controls.up, KeyCode::Up);
        assert_eq!(controls.speed, 5.0);
        assert_eq!(scene.objects[0].position, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_transform_from_object() {
        let object = ObjectConfig {
            position: Point::new(3.0, 4.0),
            layer: 2,
            angle: 45.0,
            scale: 2.0,
            ..ObjectConfig::default()
        };
        let transform = object.transform();
        assert_eq!(transform.position(), Point::new(3.0, 4.0));
        assert_eq!(transform.layer(), 2);
        assert_eq!(transform.angle(), 45.0);
        assert_eq!(transform.scale_factor(), 2.0);
    }

    #[test]
    fn test_bundled_scene_parses() {
        let scene =
            SceneConfig::from_str_as(include_str!("../config/scene.ron"), ConfigFormat::Ron).unwrap();
        assert!(!scene.objects.is_empty());
        assert!(scene.objects.iter().any(|object| object.controls.is_some()));
    }
}

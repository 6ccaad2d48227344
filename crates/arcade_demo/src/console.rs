//! Log-based presentation layer
//!
//! Replays a key script instead of reading a keyboard and reports the scene
//! through `log` every few frames.

use crate::config::ScriptedKey;
use arcade_engine::input::{InputEvent, InputManager};
use arcade_engine::prelude::{GameObject, GameUi};
use arcade_engine::ui::RenderedObject;

/// Frames between two scene reports
pub const DEFAULT_REPORT_INTERVAL: u64 = 30;

/// Presentation layer that writes to the log
#[derive(Debug)]
pub struct ConsoleUi {
    input: InputManager,
    script: Vec<ScriptedKey>,
    frame: u64,
    report_every: u64,
    show_colliders: bool,
}

impl ConsoleUi {
    /// Console replaying `script`, reporting every `report_every` frames
    pub fn new(mut script: Vec<ScriptedKey>, report_every: u64) -> Self {
        script.sort_by_key(|event| event.frame);
        Self {
            input: InputManager::new(),
            script,
            frame: 0,
            report_every: report_every.max(1),
            show_colliders: false,
        }
    }

    fn replay(&mut self) {
        let frame = self.frame;
        for event in self.script.iter().filter(|event| event.frame == frame) {
            if event.pressed {
                self.input.press(event.key);
            } else {
                self.input.release(event.key);
            }
        }
    }
}

impl GameUi for ConsoleUi {
    fn input(&mut self) -> InputEvent {
        self.frame += 1;
        self.replay();
        self.input.pressed_keys()
    }

    fn clear_released(&mut self) {
        self.input.clear_released();
    }

    fn render(&mut self, objects: &[&GameObject]) {
        if self.frame % self.report_every != 0 {
            return;
        }
        log::info!("frame {}: {} objects", self.frame, objects.len());
        for object in objects {
            let drawn = RenderedObject::capture(object);
            log::info!(
                "  [{}] {} at {} {}",
                drawn.layer,
                drawn.name,
                drawn.position,
                drawn.frame.as_deref().unwrap_or("-")
            );
            if self.show_colliders {
                log::debug!("    {}", object.collider());
            }
        }
    }

    fn show_colliders(&mut self, show: bool) {
        self.show_colliders = show;
    }
}

//! Presentation boundary
//!
//! The engine talks to the outside world through [`GameUi`]: it pulls the
//! input snapshot at the start of a frame, pushes the enabled objects in
//! layer order to be drawn, and clears the released-key marker at the end.
//! Windowing and drawing live behind this trait; [`HeadlessUi`] is the
//! implementation used without a window.

use crate::ecs::GameObject;
use crate::input::{InputEvent, InputManager};
use crate::physics::collision::Point;

/// Backend-agnostic presentation interface
pub trait GameUi {
    /// Keys held at the start of the frame
    fn input(&mut self) -> InputEvent;

    /// Forget keys released during the frame
    fn clear_released(&mut self);

    /// Draw the enabled objects, already sorted by ascending layer
    fn render(&mut self, objects: &[&GameObject]);

    /// Toggle collider outlines
    fn show_colliders(&mut self, _show: bool) {}
}

/// What was handed to the presentation layer for one object
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedObject {
    /// Object name
    pub name: String,
    /// Layer it was drawn on
    pub layer: u32,
    /// Draw position (entity position plus shape offset)
    pub position: Point,
    /// Frame asset key, if the shape has one
    pub frame: Option<String>,
}

impl RenderedObject {
    /// Captures the drawable state of `object`
    pub fn capture(object: &GameObject) -> Self {
        let shape = object.shape();
        let position = object.transform().position() + shape.offset();
        Self {
            name: object.name().to_string(),
            layer: object.transform().layer(),
            position,
            frame: shape.current_frame().map(str::to_string),
        }
    }
}

/// Presentation layer without a window
///
/// Input is fed programmatically through [`HeadlessUi::input_mut`]; each
/// render call replaces the recorded frame.
#[derive(Debug, Default)]
pub struct HeadlessUi {
    input: InputManager,
    last_frame: Vec<RenderedObject>,
    frames_rendered: u64,
    colliders_visible: bool,
}

impl HeadlessUi {
    /// Create a headless UI with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Input state to press and release keys on
    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }

    /// Input state
    pub fn input_manager(&self) -> &InputManager {
        &self.input
    }

    /// Objects drawn by the most recent render call, in draw order
    pub fn last_frame(&self) -> &[RenderedObject] {
        &self.last_frame
    }

    /// Number of render calls so far
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Whether collider outlines were requested
    pub fn colliders_visible(&self) -> bool {
        self.colliders_visible
    }
}

impl GameUi for HeadlessUi {
    fn input(&mut self) -> InputEvent {
        self.input.pressed_keys()
    }

    fn clear_released(&mut self) {
        self.input.clear_released();
    }

    fn render(&mut self, objects: &[&GameObject]) {
        self.last_frame = objects.iter().map(|object| RenderedObject::capture(object)).collect();
        self.frames_rendered += 1;
    }

    fn show_colliders(&mut self, show: bool) {
        self.colliders_visible = show;
    }
}

//! Demo behaviours

use crate::config::ControlScheme;
use arcade_engine::prelude::*;

/// Moves its object with the keys of a [`ControlScheme`]
#[derive(Debug, Clone, Copy)]
pub struct PlayerControl {
    scheme: ControlScheme,
}

impl PlayerControl {
    /// Steer with `scheme`
    pub fn new(scheme: ControlScheme) -> Self {
        Self { scheme }
    }

    /// Unit direction requested by the held keys, axis by axis
    pub fn direction(&self, input: &InputEvent) -> Vector {
        let axis = |negative: KeyCode, positive: KeyCode| {
            f64::from(u8::from(input.contains(positive))) - f64::from(u8::from(input.contains(negative)))
        };
        Vector::new(
            axis(self.scheme.left, self.scheme.right),
            axis(self.scheme.down, self.scheme.up),
        )
    }
}

impl Behaviour for PlayerControl {
    fn on_update(&mut self, ctx: &mut BehaviourContext<'_>, delta: Duration, input: &InputEvent) {
        let direction = self.direction(input);
        if direction.is_zero() {
            return;
        }
        let step = direction * (self.scheme.speed * delta.as_secs_f64());
        ctx.transform_mut().move_by(step, 0);
    }

    fn on_collision(&mut self, ctx: &mut BehaviourContext<'_>, others: &[EntityId]) {
        for &other in others {
            if let Some(object) = ctx.get(other) {
                log::info!("'{}' hit '{}'", ctx.name(), object.name());
            }
        }
    }
}

/// Spins at a constant rate and breaks apart on the first hit
///
/// A hit shows the next frame of the shape and destroys the object at the
/// end of the frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rock {
    degrees_per_second: f64,
}

impl Rock {
    /// Rock spinning at `degrees_per_second`
    pub fn new(degrees_per_second: f64) -> Self {
        Self { degrees_per_second }
    }
}

impl Behaviour for Rock {
    fn on_update(&mut self, ctx: &mut BehaviourContext<'_>, delta: Duration, _input: &InputEvent) {
        if self.degrees_per_second != 0.0 {
            ctx.transform_mut()
                .rotate(self.degrees_per_second * delta.as_secs_f64());
        }
    }

    fn on_collision(&mut self, ctx: &mut BehaviourContext<'_>, _others: &[EntityId]) {
        ctx.shape_mut().next_frame();
        ctx.destroy_self();
    }

    fn on_destroy(&mut self, ctx: &mut BehaviourContext<'_>) {
        log::info!("'{}' broke apart at {}", ctx.name(), ctx.transform().position());
    }
}

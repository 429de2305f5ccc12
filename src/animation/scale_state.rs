// src/animation/scale_state.rs
//
// Animation progress of a single glyph.
// Idle while direction is 0. A tap sets the direction opposite to where the
// last transition ended, updates then step the scale until it has moved a
// full unit away from prev_scale.

use crate::config::constants::SCALE_GAP;

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleState {
    scale: f32,
    direction: f32,
    prev_scale: f32,
    step: f32,
}

impl Default for ScaleState {
    fn default() -> Self {
        Self::with_step(SCALE_GAP)
    }
}

impl ScaleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step(step: f32) -> Self {
        Self {
            scale: 0.0,
            direction: 0.0,
            prev_scale: 0.0,
            step,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn prev_scale(&self) -> f32 {
        self.prev_scale
    }

    pub fn is_idle(&self) -> bool {
        self.direction == 0.0
    }

    /// Advance one step. Once the scale overshoots a full transition it is
    /// snapped back to prev_scale + direction and `on_threshold` receives
    /// the new resting scale.
    pub fn update<F: FnOnce(f32)>(&mut self, on_threshold: F) {
        self.scale += self.step * self.direction;
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.direction;
            self.direction = 0.0;
            self.prev_scale = self.scale;
            on_threshold(self.prev_scale);
        }
    }

    /// No-op while animating.
    pub fn start_updating<F: FnOnce()>(&mut self, on_start: F) {
        if self.direction == 0.0 {
            self.direction = 1.0 - 2.0 * self.prev_scale;
            on_start();
        }
    }
}

// src/render/renderer.rs
// the renderer draws one frame of the glyph and drives the tick loop

use log::debug;
use nannou::prelude::*;

use super::{hex_color, Canvas};
use crate::animation::{Animator, FrameHost, TickOutcome};
use crate::config::constants::BACKGROUND;
use crate::controllers::SequenceController;
use crate::error::TickSchedulingError;

pub struct Renderer {
    controller: SequenceController,
    animator: Animator,
    background: Rgb8,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(SequenceController::default(), Animator::default())
    }
}

impl Renderer {
    pub fn new(controller: SequenceController, animator: Animator) -> Self {
        Self {
            controller,
            animator,
            background: hex_color(BACKGROUND),
        }
    }

    pub fn controller(&self) -> &SequenceController {
        &self.controller
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn render<C, H>(
        &mut self,
        canvas: &mut C,
        viewport: &Rect,
        host: &mut H,
    ) -> Result<(), TickSchedulingError>
    where
        C: Canvas,
        H: FrameHost,
    {
        canvas.fill(self.background);
        self.controller.draw(canvas, viewport);

        let controller = &mut self.controller;
        self.animator.animate(host, || {
            let mut outcome = TickOutcome::Continue;
            controller.update(|| outcome = TickOutcome::Complete);
            outcome
        })
    }

    pub fn handle_tap<H: FrameHost>(&mut self, host: &mut H) -> Result<(), TickSchedulingError> {
        let mut started = false;
        self.controller.start_updating(|| started = true);
        if started {
            self.animator.start(host)
        } else {
            debug!("tap ignored, color {} still animating", self.controller.current_index());
            Ok(())
        }
    }
}

// src/animation/animator.rs
//
// Start/stop flag around the per-frame tick. The host calls animate() on
// every frame; only frames the host reports as due run a tick.

use std::time::Duration;

use log::debug;

use super::frame_clock::FrameHost;
use crate::config::constants::TICK_DELAY;
use crate::error::TickSchedulingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Complete,
}

#[derive(Debug)]
pub struct Animator {
    running: bool,
    delay: Duration,
}

impl Default for Animator {
    fn default() -> Self {
        Self::with_delay(TICK_DELAY)
    }
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            running: false,
            delay,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn animate<H, F>(&mut self, host: &mut H, on_tick: F) -> Result<(), TickSchedulingError>
    where
        H: FrameHost,
        F: FnOnce() -> TickOutcome,
    {
        if !self.running || !host.tick_due() {
            return Ok(());
        }
        if on_tick() == TickOutcome::Complete {
            self.stop();
        }
        host.schedule_redraw(self.delay)
    }

    pub fn start<H: FrameHost>(&mut self, host: &mut H) -> Result<(), TickSchedulingError> {
        if !self.running {
            debug!("animation started");
            self.running = true;
            host.redraw_now()?;
        }
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.running {
            debug!("animation stopped");
        }
        self.running = false;
    }
}

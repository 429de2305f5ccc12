// src/animation/frame_clock.rs
//
// The host side of the tick loop. The window keeps redrawing every frame;
// the clock decides which of those frames should also step the animation.

use std::time::{Duration, Instant};

use crate::error::TickSchedulingError;

pub trait FrameHost {
    /// True once the last requested redraw deadline has passed.
    fn tick_due(&self) -> bool;
    /// Request the next tick after `delay`.
    fn schedule_redraw(&mut self, delay: Duration) -> Result<(), TickSchedulingError>;
    /// Request a tick on the very next frame.
    fn redraw_now(&mut self) -> Result<(), TickSchedulingError>;
}

#[derive(Debug, Default)]
pub struct FrameClock {
    due: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tick_due_at(&self, now: Instant) -> bool {
        self.due.is_some_and(|due| now >= due)
    }

    pub fn schedule_from(
        &mut self,
        now: Instant,
        delay: Duration,
    ) -> Result<(), TickSchedulingError> {
        let due = now
            .checked_add(delay)
            .ok_or(TickSchedulingError::DeadlineOverflow(delay))?;
        self.due = Some(due);
        Ok(())
    }
}

impl FrameHost for FrameClock {
    fn tick_due(&self) -> bool {
        self.is_tick_due_at(Instant::now())
    }

    fn schedule_redraw(&mut self, delay: Duration) -> Result<(), TickSchedulingError> {
        self.schedule_from(Instant::now(), delay)
    }

    fn redraw_now(&mut self) -> Result<(), TickSchedulingError> {
        self.due = Some(Instant::now());
        Ok(())
    }
}

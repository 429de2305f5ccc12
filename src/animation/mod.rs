pub mod animator;
pub mod frame_clock;
pub mod scale_state;

pub use animator::{Animator, TickOutcome};
pub use frame_clock::{FrameClock, FrameHost};
pub use scale_state::ScaleState;

/// Direction of travel along the color chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn reverse(&mut self) {
        *self = match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        };
    }
}

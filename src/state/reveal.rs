//! Group reveal/collapse animation state
//!
//! Purely a render-side effect: model visibility flips atomically in the
//! dependency engine, and this only eases the drawn height of a group
//! toward its new size. It never feeds back into rule evaluation.

use std::time::{Duration, Instant};

/// Direction of the running transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDirection {
    /// Group is growing into view
    Reveal,
    /// Group is shrinking away
    Collapse,
}

/// Animation state for one dependent group's container
#[derive(Debug)]
pub struct RevealState {
    pub direction: RevealDirection,
    /// When the transition started
    start_time: Instant,
    /// Forced completion (instant transitions, animations disabled)
    settled: bool,
}

impl RevealState {
    /// Duration of the reveal/collapse animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(350);

    pub fn new(direction: RevealDirection) -> Self {
        Self {
            direction,
            start_time: Instant::now(),
            settled: false,
        }
    }

    /// A transition that is already complete (initial paint, animations off)
    pub fn settled(direction: RevealDirection) -> Self {
        Self {
            direction,
            start_time: Instant::now(),
            settled: true,
        }
    }

    /// Eased progress of the transition (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.settled {
            return 1.0;
        }
        let elapsed = self.start_time.elapsed();
        if elapsed >= Self::ANIMATION_DURATION {
            return 1.0;
        }
        let linear = elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
        simple_easing::cubic_out(linear)
    }

    /// Fraction of the group's full height to draw right now
    pub fn height_fraction(&self) -> f32 {
        match self.direction {
            RevealDirection::Reveal => self.progress(),
            RevealDirection::Collapse => 1.0 - self.progress(),
        }
    }

    /// Jump to the end state
    pub fn skip(&mut self) {
        self.settled = true;
    }

    /// Whether the transition has finished
    pub fn is_settled(&self) -> bool {
        self.settled || self.start_time.elapsed() >= Self::ANIMATION_DURATION
    }
}

//! Fixed timestep accumulator.
//!
//! Wall-clock frame time is added to a budget (clamped so a stall cannot queue
//! an unbounded catch-up), whole steps are drained from it, and the remainder
//! is reported as an interpolation fraction for rendering.

use std::time::Duration;

use crate::types::{FIXED_STEP, MAX_FRAME_TIME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimestep {
    step: Duration,
    max_frame_time: Duration,
    accumulator: Duration,
}

impl FixedTimestep {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            max_frame_time: MAX_FRAME_TIME,
            accumulator: Duration::ZERO,
        }
    }

    pub fn with_max_frame_time(mut self, max_frame_time: Duration) -> Self {
        self.max_frame_time = max_frame_time;
        self
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add one frame's elapsed time; returns how many steps to simulate.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.step.is_zero() {
            return 0;
        }
        self.accumulator += elapsed.min(self.max_frame_time);

        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Fraction of a step left in the budget, in `[0, 1)`.
    pub fn interpolation(&self) -> f32 {
        if self.step.is_zero() {
            return 0.0;
        }
        (self.accumulator.as_secs_f64() / self.step.as_secs_f64()) as f32
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(FIXED_STEP)
    }
}

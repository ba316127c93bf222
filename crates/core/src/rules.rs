//! Tunable gameplay timing and scoring.
//!
//! `Rules::default()` reproduces the constants in the `types` crate; the
//! `with_*` builders override individual values (tests use them to speed up
//! gravity or the line flash).

use std::time::Duration;

use crate::types::{
    BASE_FALL_DELAY, FALL_DELAY_DECREASE_PER_LEVEL, FIXED_STEP, LINES_PER_LEVEL,
    LINE_FLASH_DURATION, LINE_FLASH_INTERVALS, LINE_SCORES, MIN_FALL_DELAY, MOVE_INITIAL_DELAY,
    MOVE_REPEAT_DELAY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub step: Duration,
    pub base_fall_delay: Duration,
    pub fall_delay_decrease_per_level: Duration,
    pub min_fall_delay: Duration,
    pub move_initial_delay: Duration,
    pub move_repeat_delay: Duration,
    pub line_flash_duration: Duration,
    pub line_flash_intervals: u32,
    pub lines_per_level: u32,
    pub line_scores: [u32; 5],
}

impl Rules {
    pub fn new() -> Self {
        Self {
            step: FIXED_STEP,
            base_fall_delay: BASE_FALL_DELAY,
            fall_delay_decrease_per_level: FALL_DELAY_DECREASE_PER_LEVEL,
            min_fall_delay: MIN_FALL_DELAY,
            move_initial_delay: MOVE_INITIAL_DELAY,
            move_repeat_delay: MOVE_REPEAT_DELAY,
            line_flash_duration: LINE_FLASH_DURATION,
            line_flash_intervals: LINE_FLASH_INTERVALS,
            lines_per_level: LINES_PER_LEVEL,
            line_scores: LINE_SCORES,
        }
    }

    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    pub fn with_fall_delay(mut self, base: Duration, decrease_per_level: Duration, min: Duration) -> Self {
        self.base_fall_delay = base;
        self.fall_delay_decrease_per_level = decrease_per_level;
        self.min_fall_delay = min;
        self
    }

    pub fn with_move_delays(mut self, initial: Duration, repeat: Duration) -> Self {
        self.move_initial_delay = initial;
        self.move_repeat_delay = repeat;
        self
    }

    pub fn with_line_flash(mut self, duration: Duration, intervals: u32) -> Self {
        self.line_flash_duration = duration;
        self.line_flash_intervals = intervals.max(1);
        self
    }

    pub fn with_lines_per_level(mut self, lines: u32) -> Self {
        self.lines_per_level = lines.max(1);
        self
    }

    /// Length of one on/off interval of the line flash.
    pub fn flash_interval(&self) -> Duration {
        self.line_flash_duration / self.line_flash_intervals.max(1)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let rules = Rules::default();
        assert_eq!(rules.step, FIXED_STEP);
        assert_eq!(rules.base_fall_delay, BASE_FALL_DELAY);
        assert_eq!(rules.line_scores, LINE_SCORES);
        assert_eq!(rules.flash_interval(), Duration::from_millis(80));
    }

    #[test]
    fn builders_override_single_values() {
        let rules = Rules::default()
            .with_line_flash(Duration::from_millis(100), 0)
            .with_lines_per_level(0);
        assert_eq!(rules.line_flash_intervals, 1);
        assert_eq!(rules.lines_per_level, 1);
        assert_eq!(rules.move_repeat_delay, MOVE_REPEAT_DELAY);
    }
}

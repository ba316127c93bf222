//! Scoring module - classic line-clear scoring and level progression
//!
//! Points for a clear use the level *before* the cleared lines are counted.
//! Level is derived from the running line total; gravity speeds up linearly
//! with level down to a floor.

use std::time::Duration;

use crate::rules::Rules;

/// Calculate line clear score (Classic rules)
/// lines: number of lines cleared (1-4)
/// level: current level (0-based)
pub fn calculate_line_score(rules: &Rules, lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    rules.line_scores[lines].saturating_mul(level + 1)
}

/// Level for a running total of cleared lines.
pub fn calculate_level(rules: &Rules, lines: u32) -> u32 {
    lines / rules.lines_per_level.max(1)
}

/// Gravity interval at `level`, never below the configured floor.
pub fn fall_delay_for_level(rules: &Rules, level: u32) -> Duration {
    rules
        .base_fall_delay
        .saturating_sub(rules.fall_delay_decrease_per_level.saturating_mul(level))
        .max(rules.min_fall_delay)
}

/// Running score, line count and level for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    lines: u32,
    level: u32,
    fall_delay: Duration,
}

/// What one committed clear changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearOutcome {
    pub points: u32,
    /// New level when the clear crossed a level boundary.
    pub level_up: Option<u32>,
}

impl Progress {
    pub fn new(rules: &Rules) -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 0,
            fall_delay: fall_delay_for_level(rules, 0),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_delay(&self) -> Duration {
        self.fall_delay
    }

    /// Apply a clear of `count` lines.
    pub fn record_clear(&mut self, rules: &Rules, count: usize) -> ClearOutcome {
        let points = calculate_line_score(rules, count, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(count as u32);

        let previous = self.level;
        self.level = calculate_level(rules, self.lines);
        self.fall_delay = fall_delay_for_level(rules, self.level);

        ClearOutcome {
            points,
            level_up: (self.level != previous).then_some(self.level),
        }
    }
}

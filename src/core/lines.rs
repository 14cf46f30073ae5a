use std::time::Duration;

use bevy::time::{Timer, TimerMode};

use crate::core::board::Board;
use crate::core::rules::Rules;

/// Full rows waiting to be removed while they blink.
#[derive(Clone, Debug)]
pub struct LineFlash {
    rows: Vec<usize>,
    timer: Timer,
    half_period: Duration,
}

impl LineFlash {
    /// Starts a flash when the board has full rows.
    pub fn detect(board: &Board, rules: &Rules) -> Option<Self> {
        let rows = board.full_rows();
        if rows.is_empty() {
            return None;
        }

        Some(Self {
            rows,
            timer: Timer::new(rules.flash_duration(), TimerMode::Once),
            half_period: rules.flash_half_period,
        })
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// True once the flash has run its course.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.timer.tick(delta).finished()
    }

    /// Whether the rows show highlighted right now; blinks start lit.
    pub fn is_lit(&self) -> bool {
        if self.half_period.is_zero() {
            return true;
        }
        let phase = self.timer.elapsed().as_nanos() / self.half_period.as_nanos();
        phase % 2 == 0
    }

    /// Removes the flashed rows and returns how many went.
    pub fn finish(self, board: &mut Board) -> usize {
        board.clear_rows(&self.rows);
        self.rows.len()
    }
}

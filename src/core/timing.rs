use std::time::Duration;

use bevy::time::{Timer, TimerMode};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Shift {
    Left,
    Right,
}

impl Shift {
    pub fn d_col(self) -> isize {
        match self {
            Shift::Left => -1,
            Shift::Right => 1,
        }
    }

    /// Resolves the two held keys; both at once cancel out.
    pub fn from_held(left: bool, right: bool) -> Option<Shift> {
        match (left, right) {
            (true, false) => Some(Shift::Left),
            (false, true) => Some(Shift::Right),
            _ => None,
        }
    }
}

/// Delayed auto-repeat for horizontal movement.
#[derive(Clone, Debug)]
pub struct AutoShift {
    held: Option<Shift>,
    delay: Timer,
    repeat: Timer,
}

impl AutoShift {
    pub fn new(delay: Duration, interval: Duration) -> Self {
        Self {
            held: None,
            delay: Timer::new(delay, TimerMode::Once),
            repeat: Timer::new(interval, TimerMode::Repeating),
        }
    }

    /// Returns the shift to apply this step, at most one.
    pub fn update(&mut self, input: Option<Shift>, delta: Duration) -> Option<Shift> {
        if input != self.held {
            self.held = input;
            self.delay.reset();
            self.repeat.reset();
            return input;
        }

        let held = self.held?;

        if !self.delay.finished() {
            self.delay.tick(delta);
            return self.delay.just_finished().then_some(held);
        }

        self.repeat.tick(delta);
        self.repeat.just_finished().then_some(held)
    }

    pub fn release(&mut self) {
        self.held = None;
    }
}

use std::time::Duration;

/// Length of one frame of the 60 Hz loop the fall speeds are tuned against.
pub const FRAME: Duration = Duration::from_nanos(16_666_667);

/// Tuning constants for one game. Nothing here changes once a game starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Rules {
    pub board_width: usize,
    pub board_height: usize,

    /// Gravity at level 0, in frames per row.
    pub base_fall_frames: u32,
    /// Frames taken off the gravity interval per level.
    pub fall_frames_per_level: u32,
    pub min_fall_frames: u32,
    /// Gravity while soft drop is held.
    pub soft_drop_frames: u32,

    /// Delay before a held left/right starts repeating.
    pub shift_delay: Duration,
    pub shift_interval: Duration,

    /// Full rows blink `flash_blinks` times, each blink on and off for `flash_half_period`.
    pub flash_blinks: u32,
    pub flash_half_period: Duration,

    pub points_per_line: u32,
    pub lines_per_level: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            board_width: 10,
            board_height: 20,
            base_fall_frames: 48,
            fall_frames_per_level: 5,
            min_fall_frames: 1,
            soft_drop_frames: 5,
            shift_delay: Duration::from_millis(200),
            shift_interval: Duration::from_millis(50),
            flash_blinks: 2,
            flash_half_period: Duration::from_millis(150),
            points_per_line: 100,
            lines_per_level: 10,
        }
    }
}

impl Rules {
    pub fn fall_interval(&self, level: u32) -> Duration {
        let frames = self
            .base_fall_frames
            .saturating_sub(self.fall_frames_per_level.saturating_mul(level))
            .max(self.min_fall_frames.max(1));
        FRAME * frames
    }

    pub fn soft_drop_interval(&self) -> Duration {
        FRAME * self.soft_drop_frames.max(1)
    }

    pub fn flash_duration(&self) -> Duration {
        self.flash_half_period * 2 * self.flash_blinks
    }
}

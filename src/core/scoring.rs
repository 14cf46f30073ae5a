use crate::core::rules::Rules;

/// Score, cleared lines and level of a running game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
}

impl Progress {
    /// Counts a clear and returns the new level when it went up.
    pub fn record_clear(&mut self, lines: u32, rules: &Rules) -> Option<u32> {
        self.score += lines * rules.points_per_line;
        self.lines += lines;

        let level = self.lines / rules.lines_per_level.max(1);
        if level > self.level {
            self.level = level;
            return Some(level);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_level_up_per_ten_lines() {
        let rules = Rules::default();
        let mut progress = Progress::default();

        assert_eq!(progress.record_clear(4, &rules), None);
        assert_eq!(progress.record_clear(6, &rules), Some(1));
        assert_eq!(progress.level, 1);
        assert_eq!(progress.lines, 10);
        assert_eq!(progress.score, 1000);

        assert_eq!(progress.record_clear(3, &rules), None);
        assert_eq!(progress.record_clear(4, &rules), None);
        assert_eq!(progress.record_clear(3, &rules), Some(2));
    }

    #[test]
    fn test_tetris_scores_four_lines() {
        let mut progress = Progress::default();
        progress.record_clear(4, &Rules::default());
        assert_eq!(progress.score, 400);
    }
}

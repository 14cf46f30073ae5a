use bevy::math::{Vec2, Vec3};
use bevy::prelude::{Color, Resource, SystemSet};

use crate::core::{Rgb, Rules};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum LevelSet {
    /// Advances the game.
    Step,
    /// Reacts to the new state: drawing, sounds, logs.
    Present,
}

#[derive(Resource, Debug, Clone)]
pub struct LevelConfig {
    pub rules: Rules,
    pub block_size: f32,
    /// Bevel edge width as a fraction of the block size.
    pub bevel_ratio: f32,
    /// How far bevel edges move towards white or black.
    pub bevel_shade: f32,
    pub preview_scale: f32,
    /// Width of the column right of the board holding the preview and score labels.
    pub panel_width: f32,
    pub font_size: f32,

    pub background: Color,
    pub text: Color,
    pub empty_fill: Color,
    pub grid: Color,
    pub overlay: Color,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            block_size: 30.0,
            bevel_ratio: 0.1,
            bevel_shade: 0.4,
            preview_scale: 2. / 3.,
            panel_width: 150.0,
            font_size: 18.0,
            background: Color::WHITE,
            text: Color::BLACK,
            empty_fill: Color::WHITE,
            grid: Color::rgb_u8(200, 200, 200),
            overlay: Color::rgba(0., 0., 0., 0.6),
        }
    }
}

impl LevelConfig {
    pub(crate) fn board_size(&self) -> Vec2 {
        Vec2::new(
            self.rules.board_width as f32,
            self.rules.board_height as f32,
        ) * self.block_size
    }

    pub(crate) fn preview_block_size(&self) -> f32 {
        self.block_size * self.preview_scale
    }

    /// Bottom-left corner of the 4×4 next-piece box, one block right of the board.
    pub(crate) fn preview_origin(&self) -> Vec3 {
        let board = self.board_size();
        Vec3::new(
            board.x + self.block_size,
            board.y - self.block_size - 4. * self.preview_block_size(),
            0.,
        )
    }

    /// Left edge of text line `line` in the side panel; line 0 sits above the preview box.
    pub(crate) fn panel_line(&self, line: usize) -> Vec3 {
        let board = self.board_size();
        let top = if line == 0 {
            board.y - self.block_size / 2.
        } else {
            self.preview_origin().y - self.block_size * line as f32
        };
        Vec3::new(board.x + self.block_size, top, 1.)
    }

    pub fn window_size(&self) -> Vec2 {
        let board = self.board_size();
        Vec2::new(board.x + 2. * self.block_size + self.panel_width, board.y)
    }

    /// World position of a board cell's bottom-left corner; row 0 is drawn at the top.
    pub(crate) fn cell_translation(&self, row: usize, col: usize) -> Vec3 {
        to_translation(row, col, self.rules.board_height, self.block_size)
    }
}

pub fn to_translation(row: usize, col: usize, rows: usize, block_size: f32) -> Vec3 {
    let flipped = rows.saturating_sub(row + 1);
    Vec2::new(col as f32, flipped as f32).extend(0.0) * block_size
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::rgb_u8(rgb.r, rgb.g, rgb.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_zero_is_drawn_on_top() {
        assert_eq!(to_translation(0, 0, 20, 30.), Vec3::new(0., 570., 0.));
        assert_eq!(to_translation(19, 9, 20, 30.), Vec3::new(270., 0., 0.));
    }

    #[test]
    fn test_window_fits_board_and_preview() {
        let config = LevelConfig::default();
        assert_eq!(config.board_size(), Vec2::new(300., 600.));
        assert_eq!(config.window_size(), Vec2::new(510., 600.));

        let preview = config.preview_origin();
        assert!(preview.x >= config.board_size().x);
        assert!(preview.x + 4. * config.preview_block_size() <= config.window_size().x);
    }

    #[test]
    fn test_panel_lines_frame_the_preview() {
        let config = LevelConfig::default();
        let preview = config.preview_origin();
        let preview_top = preview.y + 4. * config.preview_block_size();

        assert!(config.panel_line(0).y > preview_top);
        assert!(config.panel_line(0).y < config.board_size().y);
        for line in 1..4 {
            assert!(config.panel_line(line).y < preview.y);
            assert!(config.panel_line(line + 1).y < config.panel_line(line).y);
            assert_eq!(config.panel_line(line).x, preview.x);
        }
    }
}

use bevy::prelude::*;

use crate::core::{Game, PieceType};
use crate::level::blocks::{spawn_block, BevelPart};
use crate::level::common::LevelConfig;

/// Slot in the 4×4 next-piece box.
#[derive(Component, Copy, Clone, PartialEq, Eq, Debug)]
pub struct PreviewBlock {
    row: isize,
    col: isize,
}

pub fn spawn_piece_previewer(mut commands: Commands, config: Res<LevelConfig>) {
    info!("spawning piece previewer");
    let origin = config.preview_origin();
    let size = config.preview_block_size();

    for row in 0..4 {
        for col in 0..4 {
            let offset = Vec3::new(col as f32, (3 - row) as f32, 0.) * size;
            spawn_block(
                &mut commands,
                origin + offset,
                size,
                config.bevel_ratio,
                PreviewBlock { row, col },
            );
        }
    }
}

/// Whether the preview box shows a block at `(row, col)` for `kind`.
pub fn preview_covers(kind: PieceType, row: isize, col: isize) -> bool {
    kind.shape().cells.contains(&(row, col))
}

pub fn update_piece_previewer(
    game: Res<Game>,
    config: Res<LevelConfig>,
    mut query: Query<(&PreviewBlock, &BevelPart, &mut Sprite)>,
) {
    let next = game.next_piece();
    let base = next.shape().color;

    for (block, part, mut sprite) in query.iter_mut() {
        let color = if preview_covers(next, block.row, block.col) {
            part.shade(base, config.bevel_shade).into()
        } else {
            Color::NONE
        };
        if sprite.color != color {
            sprite.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_shows_four_blocks_inside_the_box() {
        for kind in PieceType::ALL {
            let covered = itertools::iproduct!(0..4, 0..4)
                .filter(|&(row, col)| preview_covers(kind, row, col))
                .count();
            assert_eq!(covered, 4, "{kind}");
        }
    }

    #[test]
    fn test_preview_of_i_is_the_top_row() {
        assert!((0..4).all(|col| preview_covers(PieceType::I, 0, col)));
        assert!(!preview_covers(PieceType::I, 1, 0));
    }
}

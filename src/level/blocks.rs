use bevy::math::{Vec2, Vec3};
use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::core::{Cell, Game, Rgb};
use crate::level::common::LevelConfig;

/// One of the five sprites a block is drawn with.
#[derive(Component, Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BevelPart {
    Fill,
    Top,
    Left,
    Bottom,
    Right,
}

impl BevelPart {
    pub const ALL: [BevelPart; 5] = [
        BevelPart::Fill,
        BevelPart::Bottom,
        BevelPart::Right,
        BevelPart::Top,
        BevelPart::Left,
    ];

    /// Top and left edges catch the light, bottom and right sit in shadow.
    pub fn shade(self, base: Rgb, amount: f32) -> Rgb {
        match self {
            BevelPart::Fill => base,
            BevelPart::Top | BevelPart::Left => base.lighten(amount),
            BevelPart::Bottom | BevelPart::Right => base.darken(amount),
        }
    }

    /// Offset from the block's bottom-left corner and size of this part.
    pub fn rect(self, size: f32, edge: f32) -> (Vec2, Vec2) {
        match self {
            BevelPart::Fill => (Vec2::ZERO, Vec2::splat(size)),
            BevelPart::Top => (Vec2::new(0., size - edge), Vec2::new(size, edge)),
            BevelPart::Left => (Vec2::ZERO, Vec2::new(edge, size)),
            BevelPart::Bottom => (Vec2::ZERO, Vec2::new(size, edge)),
            BevelPart::Right => (Vec2::new(size - edge, 0.), Vec2::new(edge, size)),
        }
    }

    /// Light edges are drawn last so they own the corners they share.
    fn depth(self) -> f32 {
        match self {
            BevelPart::Fill => 0.,
            BevelPart::Bottom | BevelPart::Right => 0.1,
            BevelPart::Top | BevelPart::Left => 0.2,
        }
    }
}

/// Board cell a sprite belongs to.
#[derive(Component, Copy, Clone, PartialEq, Eq, Debug)]
pub struct BoardBlock {
    pub row: usize,
    pub col: usize,
}

/// Spawns the five sprites of a block with `tag` on each; colors are set when painting.
pub fn spawn_block(
    commands: &mut Commands,
    origin: Vec3,
    size: f32,
    bevel_ratio: f32,
    tag: impl Component + Clone,
) {
    let edge = size * bevel_ratio;

    for part in BevelPart::ALL {
        let (offset, part_size) = part.rect(size, edge);

        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    custom_size: Some(part_size),
                    color: Color::NONE,
                    anchor: Anchor::BottomLeft,
                    ..default()
                },
                transform: Transform::from_translation(
                    origin + offset.extend(part.depth()),
                ),
                ..default()
            },
            part,
            tag.clone(),
        ));
    }
}

/// Color of one bevel part for a board cell; empty cells draw as a plain grid tile.
pub fn part_color(config: &LevelConfig, cell: Cell, part: BevelPart) -> Color {
    match cell.color() {
        Some(base) => part.shade(base, config.bevel_shade).into(),
        None if part == BevelPart::Fill => config.empty_fill,
        None => config.grid,
    }
}

pub(crate) fn spawn_board_blocks(commands: &mut Commands, config: &LevelConfig) {
    for row in 0..config.rules.board_height {
        for col in 0..config.rules.board_width {
            spawn_block(
                commands,
                config.cell_translation(row, col),
                config.block_size,
                config.bevel_ratio,
                BoardBlock { row, col },
            );
        }
    }
}

pub(crate) fn paint_board(
    game: Res<Game>,
    config: Res<LevelConfig>,
    mut query: Query<(&BoardBlock, &BevelPart, &mut Sprite)>,
) {
    let cells = game.display_cells();

    for (block, part, mut sprite) in query.iter_mut() {
        let cell = cells.get(block.row, block.col).copied().unwrap_or_default();
        let color = part_color(&config, cell, *part);
        if sprite.color != color {
            sprite.color = color;
        }
    }
}

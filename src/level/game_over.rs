use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::assets::GameAssets;
use crate::level::common::LevelConfig;
use crate::AppState;

pub(crate) struct GameOverPlugin;

impl Plugin for GameOverPlugin {
    fn build(&self, app: &mut App) {
        app.add_system(setup_game_over_overlay.in_schedule(OnEnter(AppState::GameOver)));
    }
}

#[derive(Component)]
struct GameOverOverlay;

// dims the frozen board and lays a labelled band across its middle
fn setup_game_over_overlay(
    mut commands: Commands,
    config: Res<LevelConfig>,
    game_assets: Res<GameAssets>,
) {
    info!("setup_game_over_overlay");
    let board = config.board_size();

    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                custom_size: Some(board),
                color: config.overlay,
                anchor: Anchor::BottomLeft,
                ..default()
            },
            transform: Transform::from_xyz(0., 0., 1.),
            ..default()
        },
        GameOverOverlay,
    ));

    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                custom_size: Some(Vec2::new(board.x, 2. * config.block_size)),
                color: Color::rgb_u8(200, 40, 40),
                anchor: Anchor::CenterLeft,
                ..default()
            },
            transform: Transform::from_xyz(0., board.y / 2., 1.1),
            ..default()
        },
        GameOverOverlay,
    ));

    commands.spawn((
        Text2dBundle {
            text: Text::from_section(
                "GAME OVER",
                TextStyle {
                    font: game_assets.font.clone(),
                    font_size: 2. * config.font_size,
                    color: Color::WHITE,
                },
            ),
            transform: Transform::from_xyz(board.x / 2., board.y / 2., 1.2),
            text_anchor: Anchor::Center,
            ..default()
        },
        GameOverOverlay,
    ));
}

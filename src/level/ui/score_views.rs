use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::assets::GameAssets;
use crate::core::{Game, Progress};
use crate::level::common::LevelConfig;

pub const TITLE: &str = "Tetris";

/// Which progress figure a panel label shows.
#[derive(Component, Copy, Clone, PartialEq, Eq, Debug)]
pub enum ScoreText {
    Score,
    Lines,
    Level,
}

impl ScoreText {
    const ALL: [ScoreText; 3] = [ScoreText::Score, ScoreText::Lines, ScoreText::Level];

    fn make_text(self, progress: &Progress) -> String {
        match self {
            ScoreText::Score => format!("Score: {}", progress.score),
            ScoreText::Lines => format!("Lines: {}", progress.lines),
            ScoreText::Level => format!("Level: {}", progress.level),
        }
    }
}

fn panel_text(
    value: String,
    config: &LevelConfig,
    game_assets: &GameAssets,
    translation: Vec3,
) -> Text2dBundle {
    Text2dBundle {
        text: Text::from_section(
            value,
            TextStyle {
                font: game_assets.font.clone(),
                font_size: config.font_size,
                color: config.text,
            },
        ),
        transform: Transform::from_translation(translation),
        text_anchor: Anchor::CenterLeft,
        ..Default::default()
    }
}

pub fn spawn_score_views(
    mut commands: Commands,
    config: Res<LevelConfig>,
    game_assets: Res<GameAssets>,
    game: Res<Game>,
) {
    commands.spawn(panel_text(
        "Next:".to_owned(),
        &config,
        &game_assets,
        config.panel_line(0),
    ));

    for (line, label) in ScoreText::ALL.into_iter().enumerate() {
        commands.spawn((
            panel_text(
                label.make_text(game.progress()),
                &config,
                &game_assets,
                config.panel_line(line + 1),
            ),
            label,
        ));
    }
}

pub fn update_score_views(game: Res<Game>, mut query: Query<(&ScoreText, &mut Text)>) {
    for (label, mut text) in query.iter_mut() {
        let value = label.make_text(game.progress());
        if let Some(section) = text.sections.first_mut() {
            if section.value != value {
                section.value = value;
            }
        }
    }
}

mod piece_previewer;
mod score_views;

use bevy::prelude::*;

use crate::level::common::LevelSet;
use crate::level::ui::piece_previewer::*;
use crate::level::ui::score_views::*;
use crate::AppState;

pub use score_views::TITLE;

pub(crate) struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_startup_system(spawn_piece_previewer)
            // labels need the font, which is ready once loading ends
            .add_system(spawn_score_views.in_schedule(OnEnter(AppState::Playing)))
            .add_systems((update_piece_previewer, update_score_views).in_set(LevelSet::Present));
    }
}

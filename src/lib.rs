use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_asset_loader::prelude::*;

mod assets;
mod core;
mod level;

use crate::level::LevelPlugin;

pub use crate::core::{Game, GameEvent, Rules};
pub use crate::level::{LevelConfig, TITLE};

#[derive(States, PartialEq, Eq, Debug, Clone, Copy, Hash, Default)]
pub enum AppState {
    #[default]
    Loading,
    Playing,
    GameOver,
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_state::<AppState>()
            .add_loading_state(
                LoadingState::new(AppState::Loading).continue_to_state(AppState::Playing),
            )
            .add_plugin(LevelPlugin);

        #[cfg(debug_assertions)]
        {
            app.add_plugin(FrameTimeDiagnosticsPlugin::default())
                .add_plugin(LogDiagnosticsPlugin::default());
        }
    }
}

use bevy::prelude::*;
use bevy_asset_loader::prelude::*;
use leafwing_input_manager::prelude::ActionState;

use crate::assets::GameAssets;
use crate::core::{Game, GameEvent, PieceGenerator};
use crate::level::actions::{read_controls, ActionsPlugin, GameControl};
use crate::level::blocks::{paint_board, spawn_board_blocks};
use crate::level::game_over::GameOverPlugin;
use crate::level::sound_effects::SoundEffectsPlugin;
use crate::level::ui::UiPlugin;
use crate::AppState;

mod actions;
mod blocks;
mod common;
mod game_over;
mod sound_effects;
mod ui;

pub use common::{LevelConfig, LevelSet};
pub use ui::TITLE;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app
            // resources
            .init_resource::<LevelConfig>()
            .add_event::<GameEvent>()
            // font for the panel labels
            .add_collection_to_loading_state::<_, GameAssets>(AppState::Loading)
            // plugins
            .add_plugin(ActionsPlugin)
            .add_plugin(UiPlugin)
            .add_plugin(GameOverPlugin)
            .add_plugin(SoundEffectsPlugin)
            // setup
            .add_startup_system(level_setup)
            // updates
            .configure_set(LevelSet::Step.before(LevelSet::Present))
            .add_system(
                advance_game
                    .in_set(LevelSet::Step)
                    .in_set(OnUpdate(AppState::Playing)),
            )
            .add_systems((paint_board, log_game_events).in_set(LevelSet::Present));
    }
}

// camera, board sprites and a fresh game
fn level_setup(mut commands: Commands, config: Res<LevelConfig>) {
    info!("level_setup");

    let mut camera = Camera2dBundle::default();
    let center = config.window_size() / 2.;
    camera.transform.translation.x = center.x;
    camera.transform.translation.y = center.y;
    commands.spawn(camera);

    spawn_board_blocks(&mut commands, &config);

    commands.insert_resource(Game::new(config.rules.clone(), PieceGenerator::new()));
}

fn advance_game(
    time: Res<Time>,
    mut game: ResMut<Game>,
    action_query: Query<&ActionState<GameControl>>,
    mut ev_game: EventWriter<GameEvent>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let controls = action_query
        .get_single()
        .map(read_controls)
        .unwrap_or_default();

    for event in game.update(time.delta(), controls) {
        if event == GameEvent::GameOver {
            next_state.set(AppState::GameOver);
        }
        ev_game.send(event);
    }
}

fn log_game_events(mut ev_game: EventReader<GameEvent>, game: Res<Game>) {
    for ev in ev_game.iter() {
        match ev {
            GameEvent::Spawned(kind) => debug!("spawned {kind}, next {}", game.next_piece()),
            GameEvent::Locked(kind) => debug!("locked {kind}"),
            GameEvent::LinesCleared { rows } => {
                info!("cleared rows {:?}, score {}", rows, game.score())
            }
            GameEvent::LevelUp(level) => info!(
                "level {level}, fall interval {:?}",
                game.fall_interval()
            ),
            GameEvent::GameOver => info!(
                "game over: score {}, lines {}, level {}",
                game.score(),
                game.lines(),
                game.level()
            ),
        }
    }
}

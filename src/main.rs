use bevy::prelude::*;
use bevy::window::WindowResolution;
use tetris_classic::{GamePlugin, LevelConfig, TITLE};

fn main() {
    let config = LevelConfig::default();
    let size = config.window_size();

    App::new()
        .insert_resource(ClearColor(config.background))
        .insert_resource(config)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: TITLE.to_owned(),
                resolution: WindowResolution::new(size.x, size.y),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugin(GamePlugin)
        .run();
}

use bevy::prelude::*;
use bevy_asset_loader::prelude::*;

#[derive(AssetCollection, Resource)]
pub struct GameAssets {
    #[asset(path = "fonts/DejaVuSansMono.ttf")]
    pub font: Handle<Font>,
}

use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;

use crate::engine::config::SceneConfigPlugin;
use crate::engine::core::app_state::{AppState, transition_to_running, transition_to_scene_ready};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::PointerInputPlugin;
use crate::engine::scene::AmbientScenePlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Transparent so the page shows through the background canvas
        .insert_resource(ClearColor(Color::NONE))
        .add_plugins(SceneConfigPlugin)
        .add_plugins(PointerInputPlugin)
        .add_plugins(AmbientScenePlugin);

    app.add_systems(
        Update,
        transition_to_scene_ready.run_if(in_state(AppState::Loading)),
    )
    .add_systems(
        Update,
        transition_to_running.run_if(in_state(AppState::SceneReady)),
    );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

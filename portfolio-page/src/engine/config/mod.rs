//! Runtime configuration for the ambient scene.
//!
//! Compiled defaults come from the `constants` crate; an optional JSON asset
//! can override any subset of them before the scene is built.

/// Scene configuration loading and resolution during `AppState::Loading`.
pub mod config_loader;

/// Scene configuration asset, defaults and validation.
pub mod scene_config;

use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::core::app_state::AppState;
use config_loader::{SceneConfigLoader, resolve_scene_config, start_config_load};
use scene_config::AmbientSceneConfig;

pub struct SceneConfigPlugin;

impl Plugin for SceneConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(JsonAssetPlugin::<AmbientSceneConfig>::new(&["json"]))
            .init_resource::<SceneConfigLoader>()
            .add_systems(Startup, start_config_load)
            .add_systems(
                Update,
                resolve_scene_config.run_if(in_state(AppState::Loading)),
            );
    }
}

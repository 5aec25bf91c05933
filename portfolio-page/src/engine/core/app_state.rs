use bevy::prelude::*;

use crate::engine::config::scene_config::AmbientSceneConfig;
use crate::engine::scene::SceneStats;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    SceneReady,
    Running,
}

// Transition to SceneReady once a configuration has been resolved
pub fn transition_to_scene_ready(
    config: Option<Res<AmbientSceneConfig>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if config.is_some() {
        info!("→ Transitioning to SceneReady state");
        next_state.set(AppState::SceneReady);
    }
}

// Final transition once the scene graph exists
pub fn transition_to_running(
    stats: Option<Res<SceneStats>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if stats.is_some() {
        info!("→ Scene built, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

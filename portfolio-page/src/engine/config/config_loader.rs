use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::render_settings::SCENE_CONFIG_PATH;

use super::scene_config::AmbientSceneConfig;

#[derive(Resource, Default)]
pub struct SceneConfigLoader {
    handle: Option<Handle<AmbientSceneConfig>>,
}

pub fn start_config_load(mut loader: ResMut<SceneConfigLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene configuration from: {}", SCENE_CONFIG_PATH);
    loader.handle = Some(asset_server.load(SCENE_CONFIG_PATH));
}

/// Insert the resolved `AmbientSceneConfig` once the asset loads or fails.
pub fn resolve_scene_config(
    mut commands: Commands,
    loader: Res<SceneConfigLoader>,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<AmbientSceneConfig>>,
    resolved: Option<Res<AmbientSceneConfig>>,
) {
    if resolved.is_some() {
        return;
    }

    let Some(handle) = &loader.handle else {
        commands.insert_resource(AmbientSceneConfig::default());
        return;
    };

    let config = if let Some(config) = configs.get(handle) {
        info!("✓ Scene configuration loaded");
        config.clone().validated()
    } else if let Some(LoadState::Failed(error)) = asset_server.get_load_state(handle.id()) {
        warn!("Scene configuration unavailable ({error}), using defaults");
        AmbientSceneConfig::default()
    } else {
        return;
    };

    commands.insert_resource(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<AmbientSceneConfig>()
            .init_resource::<SceneConfigLoader>()
            .add_systems(Update, resolve_scene_config);
        app
    }

    fn with_loaded(app: &mut App, config: AmbientSceneConfig) {
        let handle = app
            .world_mut()
            .resource_mut::<Assets<AmbientSceneConfig>>()
            .add(config);
        app.insert_resource(SceneConfigLoader {
            handle: Some(handle),
        });
    }

    #[test]
    fn loaded_config_is_inserted() {
        let mut app = loader_app();
        let custom = AmbientSceneConfig {
            node_count: 12,
            seed: Some(3),
            ..default()
        };
        with_loaded(&mut app, custom.clone());
        app.update();

        assert_eq!(*app.world().resource::<AmbientSceneConfig>(), custom);
    }

    #[test]
    fn no_handle_resolves_to_defaults() {
        let mut app = loader_app();
        app.update();

        assert_eq!(
            *app.world().resource::<AmbientSceneConfig>(),
            AmbientSceneConfig::default()
        );
    }

    #[test]
    fn invalid_loaded_config_resolves_to_defaults() {
        let mut app = loader_app();
        with_loaded(
            &mut app,
            AmbientSceneConfig {
                connection_probability: 2.0,
                node_count: 7,
                ..default()
            },
        );
        app.update();

        assert_eq!(
            *app.world().resource::<AmbientSceneConfig>(),
            AmbientSceneConfig::default()
        );
    }

    #[test]
    fn resolved_config_is_not_replaced() {
        let mut app = loader_app();
        app.update();

        with_loaded(
            &mut app,
            AmbientSceneConfig {
                node_count: 9,
                ..default()
            },
        );
        app.update();

        assert_eq!(
            app.world().resource::<AmbientSceneConfig>().node_count,
            constants::scene::NODE_COUNT
        );
    }
}

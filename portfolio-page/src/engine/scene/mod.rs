//! Decorative ambient scene: a rotating neuron cluster and particle swarm.
//!
//! The layout is generated once from a seeded random source when the app
//! enters `AppState::SceneReady`; afterwards only transforms change.

/// Seeded generation of node positions, connectors and particles.
pub mod layout;

/// Neuron group entity with node spheres and connector lines.
pub mod neuron_cluster;

/// Additively blended point cloud surrounding the cluster.
pub mod particle_field;

/// Per-frame group rotation.
pub mod rotation;

/// Layout seed resolution.
pub mod seed;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::camera::ambient_camera::{
    SurfaceSize, ease_camera_toward_pointer, handle_viewport_resize, init_surface_size,
    spawn_ambient_camera,
};
use crate::engine::config::scene_config::AmbientSceneConfig;
use crate::engine::core::app_state::AppState;
use crate::engine::input::pointer::drain_pointer_queue;
use layout::{expected_connectors, generate_cluster, generate_particles};
use neuron_cluster::spawn_neuron_cluster;
use particle_field::spawn_particle_field;
use rotation::advance_scene_rotation;
use seed::SceneSeed;

/// Counts recorded when the scene graph was built.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SceneStats {
    pub nodes: usize,
    pub connectors: usize,
    pub particles: usize,
}

pub struct AmbientScenePlugin;

impl Plugin for AmbientScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SurfaceSize>()
            .add_systems(Startup, init_surface_size)
            .add_systems(OnEnter(AppState::SceneReady), build_ambient_scene)
            // Surface size feeds pointer offsets in every state
            .add_systems(Update, handle_viewport_resize.before(drain_pointer_queue))
            .add_systems(
                Update,
                (
                    advance_scene_rotation,
                    ease_camera_toward_pointer.after(drain_pointer_queue),
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}

pub(crate) fn srgba(rgb: [u8; 3], alpha: f32) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2]).with_alpha(alpha)
}

/// Build camera, neuron cluster and particle field exactly once.
pub fn build_ambient_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<AmbientSceneConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    current_surface: Res<SurfaceSize>,
) {
    let seed = SceneSeed::resolve(&config);
    let mut rng = seed.rng();

    let cluster = generate_cluster(
        &mut rng,
        config.node_count,
        config.node_spread,
        config.connection_probability,
    );
    let particles = generate_particles(&mut rng, config.particle_count, config.particle_spread);

    let surface = match windows.single() {
        Ok(window) => SurfaceSize::new(window.width(), window.height()),
        Err(_) => {
            warn!(
                "No primary window for the ambient scene, using a {}x{} surface",
                current_surface.width, current_surface.height
            );
            *current_surface
        }
    };

    spawn_ambient_camera(&mut commands, &config, &surface);
    spawn_neuron_cluster(
        &mut commands,
        &mut meshes,
        &mut materials,
        &cluster,
        config.neuron_rotation_rate,
    );
    spawn_particle_field(
        &mut commands,
        &mut meshes,
        &mut materials,
        &particles,
        config.particle_rotation_rate,
    );

    let stats = SceneStats {
        nodes: cluster.nodes.len(),
        connectors: cluster.connectors.len(),
        particles: particles.count(),
    };

    info!("Ambient scene built from seed {}:", seed.0);
    info!("  Nodes: {}", stats.nodes);
    info!(
        "  Connectors: {} (expected {:.1})",
        stats.connectors,
        expected_connectors(config.node_count, config.connection_probability)
    );
    info!("  Particles: {}", stats.particles);
    info!("  Surface: {}x{}", surface.width, surface.height);

    commands.insert_resource(surface);
    commands.insert_resource(seed);
    commands.insert_resource(stats);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::camera::ambient_camera::AmbientCamera;
    use neuron_cluster::{Connector, NeuronGroup, NeuronNode};
    use particle_field::ParticleField;

    fn scene_app(config: AmbientSceneConfig) -> App {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<SurfaceSize>()
            .insert_resource(config)
            .add_systems(Update, build_ambient_scene);
        app
    }

    fn count<C: Component>(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<C>>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn build_spawns_configured_graph() {
        let mut app = scene_app(AmbientSceneConfig {
            seed: Some(17),
            particle_count: 300,
            ..default()
        });
        app.update();

        let stats = *app.world().resource::<SceneStats>();
        assert_eq!(stats.nodes, 50);
        assert_eq!(stats.particles, 300);

        assert_eq!(count::<NeuronGroup>(&mut app), 1);
        assert_eq!(count::<NeuronNode>(&mut app), 50);
        assert_eq!(count::<Connector>(&mut app), stats.connectors);
        assert_eq!(count::<ParticleField>(&mut app), 1);
        assert_eq!(count::<AmbientCamera>(&mut app), 1);
        assert_eq!(*app.world().resource::<SceneSeed>(), SceneSeed(17));
    }

    #[test]
    fn camera_starts_on_view_axis() {
        let mut app = scene_app(AmbientSceneConfig {
            seed: Some(1),
            ..default()
        });
        app.update();

        let transform = *app
            .world_mut()
            .query_filtered::<&Transform, With<AmbientCamera>>()
            .single(app.world())
            .unwrap();
        assert_eq!(transform.translation, Vec3::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn missing_window_falls_back_to_tracked_surface() {
        let mut app = scene_app(AmbientSceneConfig {
            seed: Some(2),
            particle_count: 10,
            ..default()
        });
        app.insert_resource(SurfaceSize::new(1000.0, 500.0));
        app.update();

        assert_eq!(
            *app.world().resource::<SurfaceSize>(),
            SurfaceSize::new(1000.0, 500.0)
        );
        let projection = app
            .world_mut()
            .query_filtered::<&Projection, With<AmbientCamera>>()
            .single(app.world())
            .unwrap()
            .clone();
        let Projection::Perspective(perspective) = projection else {
            panic!("expected perspective projection");
        };
        assert_eq!(perspective.aspect_ratio, 2.0);
    }

    #[test]
    fn resize_is_applied_before_pointer_offset() {
        let mut app = App::new();
        app.add_plugins(crate::engine::input::PointerInputPlugin)
            .add_event::<bevy::window::WindowResized>()
            .add_event::<bevy::window::CursorMoved>()
            .add_systems(Update, handle_viewport_resize.before(drain_pointer_queue));

        app.world_mut().send_event(bevy::window::WindowResized {
            window: Entity::PLACEHOLDER,
            width: 400.0,
            height: 200.0,
        });
        app.world()
            .resource::<crate::engine::input::pointer::PointerQueue>()
            .push(Vec2::new(200.0, 100.0));
        app.update();

        let offset = *app
            .world()
            .resource::<crate::engine::input::pointer::PointerOffset>();
        assert_eq!(offset.0, Vec2::ZERO);
    }

    #[test]
    fn same_seed_builds_same_topology() {
        let connectors = |seed| {
            let mut app = scene_app(AmbientSceneConfig {
                seed: Some(seed),
                particle_count: 10,
                ..default()
            });
            app.update();
            app.world().resource::<SceneStats>().connectors
        };

        assert_eq!(connectors(23), connectors(23));
    }
}

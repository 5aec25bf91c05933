use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use constants::render_settings::{CAMERA_FAR, CAMERA_NEAR};

use crate::engine::config::scene_config::AmbientSceneConfig;
use crate::engine::input::pointer::PointerOffset;

#[derive(Component)]
pub struct AmbientCamera;

/// Logical size of the drawing surface, kept equal to the viewport.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.height > 0.0).then(|| self.width / self.height)
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// One step of exponential smoothing from `current` toward `target`.
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

pub fn spawn_ambient_camera(
    commands: &mut Commands,
    config: &AmbientSceneConfig,
    surface: &SurfaceSize,
) {
    let mut perspective = PerspectiveProjection {
        fov: config.camera_fov_degrees.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    };
    if let Some(aspect_ratio) = surface.aspect_ratio() {
        perspective.aspect_ratio = aspect_ratio;
    }

    commands.spawn((
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Projection::from(perspective),
        Transform::from_xyz(0.0, 0.0, config.camera_distance).looking_at(Vec3::ZERO, Vec3::Y),
        AmbientCamera,
    ));
}

/// Ease camera x/y toward the pointer target and keep it aimed at the origin.
pub fn ease_camera_toward_pointer(
    pointer: Res<PointerOffset>,
    config: Res<AmbientSceneConfig>,
    mut cameras: Query<&mut Transform, With<AmbientCamera>>,
) {
    let target = pointer.camera_target();

    for mut transform in &mut cameras {
        transform.translation.x =
            ease_toward(transform.translation.x, target.x, config.smoothing_factor);
        transform.translation.y =
            ease_toward(transform.translation.y, target.y, config.smoothing_factor);
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}

/// Set the perspective aspect ratio from the surface; degenerate sizes are ignored.
pub fn update_aspect(projection: &mut Projection, surface: &SurfaceSize) {
    if let (Projection::Perspective(perspective), Some(aspect_ratio)) =
        (projection, surface.aspect_ratio())
    {
        perspective.aspect_ratio = aspect_ratio;
    }
}

/// Take the initial surface size from the primary window, if there is one.
pub fn init_surface_size(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut surface: ResMut<SurfaceSize>,
) {
    match windows.single() {
        Ok(window) => *surface = SurfaceSize::new(window.width(), window.height()),
        Err(_) => warn!(
            "No primary window, assuming a {}x{} surface",
            surface.width, surface.height
        ),
    }
}

pub fn handle_viewport_resize(
    mut resize_events: EventReader<WindowResized>,
    mut surface: ResMut<SurfaceSize>,
    mut cameras: Query<&mut Projection, With<AmbientCamera>>,
) {
    let Some(resized) = resize_events.read().last() else {
        return;
    };

    debug!("Viewport resized to {}x{}", resized.width, resized.height);
    *surface = SurfaceSize::new(resized.width, resized.height);

    for mut projection in &mut cameras {
        update_aspect(&mut projection, &surface);
    }
}

//! Pointer input feeding the camera easing.
//!
//! On the web the canvas sits behind page content, so pointer moves are
//! captured at document level and handed to the ECS through a shared queue.

/// Pointer queue, offset resource and platform listeners.
pub mod pointer;

use bevy::prelude::*;

use crate::engine::camera::ambient_camera::SurfaceSize;
use pointer::{PointerOffset, PointerQueue};

pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerQueue>()
            .init_resource::<PointerOffset>()
            .init_resource::<SurfaceSize>()
            .add_systems(Update, pointer::drain_pointer_queue);

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, pointer::setup_pointer_listener);

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(
            Update,
            pointer::track_cursor.before(pointer::drain_pointer_queue),
        );
    }
}

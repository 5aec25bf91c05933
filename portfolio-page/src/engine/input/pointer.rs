use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use constants::scene::POINTER_DIVISOR;

use crate::engine::camera::ambient_camera::SurfaceSize;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Last pointer position relative to the viewport centre, scaled down.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerOffset(pub Vec2);

impl PointerOffset {
    pub fn from_client(position: Vec2, viewport: Vec2) -> Self {
        Self((position - viewport * 0.5) / POINTER_DIVISOR)
    }

    /// Camera x/y target. Screen y grows downward, world y upward.
    pub fn camera_target(self) -> Vec2 {
        Vec2::new(self.0.x, -self.0.y)
    }
}

/// Thread-safe queue of client-space pointer positions from event listeners.
#[derive(Resource, Clone, Default)]
pub struct PointerQueue(Arc<Mutex<Vec<Vec2>>>);

impl PointerQueue {
    pub fn push(&self, position: Vec2) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(position);
        }
    }

    fn take_latest(&self) -> Option<Vec2> {
        let mut queue = self.0.lock().ok()?;
        let latest = queue.last().copied();
        queue.clear();
        latest
    }
}

/// Only the most recent sample matters; earlier ones in the frame are dropped.
pub fn drain_pointer_queue(
    queue: Res<PointerQueue>,
    surface: Res<SurfaceSize>,
    mut offset: ResMut<PointerOffset>,
) {
    if let Some(position) = queue.take_latest() {
        *offset = PointerOffset::from_client(position, surface.as_vec2());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn track_cursor(mut cursor_events: EventReader<CursorMoved>, queue: Res<PointerQueue>) {
    for event in cursor_events.read() {
        queue.push(event.position);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn setup_pointer_listener(queue: Res<PointerQueue>) {
    let queue = queue.clone();

    let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        queue.push(Vec2::new(event.client_x() as f32, event.client_y() as f32));
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        warn!("No document, pointer tracking disabled");
        return;
    };

    if let Err(error) =
        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
    {
        warn!("Pointer tracking disabled: {error:?}");
        return;
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
}

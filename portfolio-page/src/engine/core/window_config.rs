use bevy::prelude::*;
use bevy::window::PresentMode;
use constants::render_settings::MAX_PIXEL_RATIO;

#[cfg(target_arch = "wasm32")]
use bevy::window::WindowResolution;
#[cfg(target_arch = "wasm32")]
use constants::render_settings::CANVAS_SELECTOR;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        let device_ratio = web_sys::window().map_or(1.0, |window| window.device_pixel_ratio());

        Window {
            canvas: Some(CANVAS_SELECTOR.into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            transparent: true,
            present_mode: PresentMode::AutoVsync,
            resolution: WindowResolution::default()
                .with_scale_factor_override(capped_pixel_ratio(device_ratio)),
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Portfolio ambient scene".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Device pixel ratio clamped to `MAX_PIXEL_RATIO`; unusable ratios map to 1.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn capped_pixel_ratio(device_ratio: f64) -> f32 {
    if !device_ratio.is_finite() || device_ratio <= 0.0 {
        return 1.0;
    }
    device_ratio.min(MAX_PIXEL_RATIO) as f32
}

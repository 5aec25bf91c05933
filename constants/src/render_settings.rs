/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Camera distance from the origin along +Z
pub const CAMERA_DISTANCE: f32 = 50.0;

/// Device pixel ratio is clamped to this to bound fill cost on dense displays
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Canvas the renderer binds to on the web
pub const CANVAS_SELECTOR: &str = "#canvas";

/// Runtime scene configuration, relative to the asset root
pub const SCENE_CONFIG_PATH: &str = "config/ambient_scene.json";

//! Camera for the ambient scene.
//!
//! Provides the perspective camera, pointer-driven easing and
//! viewport resize handling.

/// Ambient camera spawn, easing and surface size tracking.
pub mod ambient_camera;

//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration and state transitions
//! for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
pub mod app_setup;

/// Application state machine from configuration loading to the running scene.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Binds the page canvas on the web and caps the device pixel ratio.
pub mod window_config;

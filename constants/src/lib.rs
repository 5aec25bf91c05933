//! Shared constants for the portfolio page and its ambient scene.

/// DOM selectors, style classes and reveal threshold.
pub mod page;

/// Camera and surface settings for the ambient renderer.
pub mod render_settings;

/// Procedural scene parameters: node cluster, connectors and particle field.
pub mod scene;

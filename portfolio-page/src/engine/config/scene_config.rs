use bevy::prelude::*;
use constants::render_settings::{CAMERA_DISTANCE, CAMERA_FOV_DEGREES};
use constants::scene::{
    CAMERA_SMOOTHING_FACTOR, CONNECTION_PROBABILITY, MAX_NODE_COUNT, MAX_PARTICLE_COUNT,
    NEURON_ROTATION_RATE, NODE_COUNT, NODE_SPREAD, PARTICLE_COUNT, PARTICLE_ROTATION_RATE,
    PARTICLE_SPREAD,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable scene parameters. Fields absent from the JSON keep their defaults.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientSceneConfig {
    pub node_count: usize,
    pub node_spread: f32,
    pub connection_probability: f64,
    pub particle_count: usize,
    pub particle_spread: f32,
    /// Radians per frame, [x, y]
    pub neuron_rotation_rate: [f32; 2],
    pub particle_rotation_rate: [f32; 2],
    pub smoothing_factor: f32,
    pub camera_distance: f32,
    pub camera_fov_degrees: f32,
    /// Fixed layout seed; a clock-derived seed is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AmbientSceneConfig {
    fn default() -> Self {
        Self {
            node_count: NODE_COUNT,
            node_spread: NODE_SPREAD,
            connection_probability: CONNECTION_PROBABILITY,
            particle_count: PARTICLE_COUNT,
            particle_spread: PARTICLE_SPREAD,
            neuron_rotation_rate: NEURON_ROTATION_RATE,
            particle_rotation_rate: PARTICLE_ROTATION_RATE,
            smoothing_factor: CAMERA_SMOOTHING_FACTOR,
            camera_distance: CAMERA_DISTANCE,
            camera_fov_degrees: CAMERA_FOV_DEGREES,
            seed: None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SceneConfigError {
    #[error("connection probability {0} is outside [0, 1]")]
    Probability(f64),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("smoothing factor {0} is outside (0, 1]")]
    Smoothing(f32),
    #[error("field of view {0} degrees is outside (0, 180)")]
    FieldOfView(f32),
    #[error("{field} of {value} exceeds the maximum of {max}")]
    TooMany {
        field: &'static str,
        value: usize,
        max: usize,
    },
}

impl AmbientSceneConfig {
    pub fn validate(&self) -> Result<(), SceneConfigError> {
        for (field, value, max) in [
            ("node_count", self.node_count, MAX_NODE_COUNT),
            ("particle_count", self.particle_count, MAX_PARTICLE_COUNT),
        ] {
            if value > max {
                return Err(SceneConfigError::TooMany { field, value, max });
            }
        }

        if !(0.0..=1.0).contains(&self.connection_probability) {
            return Err(SceneConfigError::Probability(self.connection_probability));
        }

        for (field, value) in [
            ("node_spread", self.node_spread),
            ("particle_spread", self.particle_spread),
            ("camera_distance", self.camera_distance),
        ] {
            // Negated comparison also rejects NaN
            if !(value > 0.0) {
                return Err(SceneConfigError::NonPositive { field, value });
            }
        }

        if !(self.smoothing_factor > 0.0 && self.smoothing_factor <= 1.0) {
            return Err(SceneConfigError::Smoothing(self.smoothing_factor));
        }

        if !(self.camera_fov_degrees > 0.0 && self.camera_fov_degrees < 180.0) {
            return Err(SceneConfigError::FieldOfView(self.camera_fov_degrees));
        }

        Ok(())
    }

    /// This configuration if valid, otherwise the compiled defaults.
    pub fn validated(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(error) => {
                warn!("Rejected scene configuration ({error}), using defaults");
                Self::default()
            }
        }
    }
}

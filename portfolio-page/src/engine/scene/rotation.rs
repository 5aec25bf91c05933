use bevy::prelude::*;

/// Continuous rotation by a fixed increment per frame, accumulated as XYZ Euler angles.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SceneRotation {
    pub angles: Vec2,
    pub rate: Vec2,
}

impl SceneRotation {
    pub fn new(rate: [f32; 2]) -> Self {
        Self {
            angles: Vec2::ZERO,
            rate: Vec2::from_array(rate),
        }
    }

    /// Step one frame and return the resulting orientation.
    pub fn advance(&mut self) -> Quat {
        self.angles += self.rate;
        Quat::from_euler(EulerRot::XYZ, self.angles.x, self.angles.y, 0.0)
    }
}

pub fn advance_scene_rotation(mut query: Query<(&mut SceneRotation, &mut Transform)>) {
    for (mut rotation, mut transform) in &mut query {
        transform.rotation = rotation.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_rotate_independently() {
        let mut app = App::new();
        app.add_systems(Update, advance_scene_rotation);

        let neurons = app
            .world_mut()
            .spawn((Transform::default(), SceneRotation::new([0.0005, 0.001])))
            .id();
        let particles = app
            .world_mut()
            .spawn((Transform::default(), SceneRotation::new([0.0002, 0.0004])))
            .id();

        for _ in 0..1000 {
            app.update();
        }

        let neuron_angles = app.world().get::<SceneRotation>(neurons).unwrap().angles;
        let particle_angles = app.world().get::<SceneRotation>(particles).unwrap().angles;
        assert!((neuron_angles - Vec2::new(0.5, 1.0)).length() < 1e-3);
        assert!((particle_angles - Vec2::new(0.2, 0.4)).length() < 1e-3);

        let neuron_rotation = app.world().get::<Transform>(neurons).unwrap().rotation;
        let particle_rotation = app.world().get::<Transform>(particles).unwrap().rotation;
        assert!(!neuron_rotation.abs_diff_eq(particle_rotation, 1e-3));

        let (x, y, _) = neuron_rotation.to_euler(EulerRot::XYZ);
        assert!((x - 0.5).abs() < 1e-3 && (y - 1.0).abs() < 1e-3);
    }
}

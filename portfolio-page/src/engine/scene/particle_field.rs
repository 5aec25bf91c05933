use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;
use constants::scene::PARTICLE_OPACITY;

use super::layout::ParticleLayout;
use super::rotation::SceneRotation;

#[derive(Component)]
pub struct ParticleField;

pub fn spawn_particle_field(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    layout: &ParticleLayout,
    rotation_rate: [f32; 2],
) -> Entity {
    // Vertex colours are multiplied by the base colour, so white keeps them as generated.
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE.with_alpha(PARTICLE_OPACITY),
        alpha_mode: AlphaMode::Add,
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Mesh3d(meshes.add(particle_mesh(layout))),
            MeshMaterial3d(material),
            Transform::IDENTITY,
            Visibility::Visible,
            NoFrustumCulling,
            SceneRotation::new(rotation_rate),
            ParticleField,
        ))
        .id()
}

pub fn particle_mesh(layout: &ParticleLayout) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, layout.positions.clone());
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, layout.colours.clone());
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::layout::generate_particles;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn particle_mesh_carries_every_particle() {
        let mut rng = StdRng::seed_from_u64(8);
        let layout = generate_particles(&mut rng, 250, 200.0);
        let mesh = particle_mesh(&layout);

        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::PointList);
        assert_eq!(mesh.count_vertices(), 250);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_COLOR).is_some());
    }
}

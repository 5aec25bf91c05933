use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use constants::scene::{
    CONNECTOR_COLOUR, CONNECTOR_OPACITY, NODE_COLOUR, NODE_OPACITY, NODE_RADIUS,
    NODE_SPHERE_SEGMENTS,
};

use super::layout::ClusterLayout;
use super::rotation::SceneRotation;
use super::srgba;

/// Parent of every node and connector; rotated as one group.
#[derive(Component)]
pub struct NeuronGroup;

#[derive(Component)]
pub struct NeuronNode;

#[derive(Component)]
pub struct Connector;

pub fn spawn_neuron_cluster(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    layout: &ClusterLayout,
    rotation_rate: [f32; 2],
) -> Entity {
    let node_mesh = meshes.add(
        Sphere::new(NODE_RADIUS)
            .mesh()
            .uv(NODE_SPHERE_SEGMENTS, NODE_SPHERE_SEGMENTS),
    );
    let node_material = materials.add(StandardMaterial {
        base_color: srgba(NODE_COLOUR, NODE_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });
    let connector_material = materials.add(StandardMaterial {
        base_color: srgba(CONNECTOR_COLOUR, CONNECTOR_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let connector_meshes: Vec<Handle<Mesh>> = layout
        .connector_endpoints()
        .map(|(start, end)| meshes.add(connector_mesh(start, end)))
        .collect();

    commands
        .spawn((
            NeuronGroup,
            SceneRotation::new(rotation_rate),
            Transform::IDENTITY,
            Visibility::Visible,
        ))
        .with_children(|parent| {
            for &position in &layout.nodes {
                parent.spawn((
                    Mesh3d(node_mesh.clone()),
                    MeshMaterial3d(node_material.clone()),
                    Transform::from_translation(position),
                    NeuronNode,
                ));
            }

            for mesh in connector_meshes {
                parent.spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(connector_material.clone()),
                    Transform::IDENTITY,
                    Connector,
                ));
            }
        })
        .id()
}

/// Single line segment in group-local space.
pub fn connector_mesh(start: Vec3, end: Vec3) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![start.to_array(), end.to_array()]);
    mesh.insert_indices(Indices::U32(vec![0, 1]));
    mesh
}

//! The spinning cube group and its edge cylinders

use bevy::prelude::*;
use cubeframe_core::edge::{EDGE_METALLIC, EDGE_RADIUS, EDGE_RESOLUTION, EDGE_ROUGHNESS};
use cubeframe_core::{apply_spin, PanelEffects, Rgb};

use crate::types::{to_bevy_color, CubeEdge, CubeGroup, CubeModel, CubeSettings, SettingsApplied};

/// Plugin for the cube structure and its animation
pub struct StructurePlugin;

impl Plugin for StructurePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CubeSettings>()
            .init_resource::<CubeModel>()
            .add_message::<SettingsApplied>()
            .add_systems(Startup, spawn_cube_group)
            .add_systems(Update, (spin_cube, rebuild_cube_structure));
    }
}

/// Spawn the empty group and ask for the first full build
fn spawn_cube_group(
    mut commands: Commands,
    settings: Res<CubeSettings>,
    mut applied: MessageWriter<SettingsApplied>,
) {
    commands.spawn((CubeGroup, Transform::default(), Visibility::default()));
    applied.write(SettingsApplied(PanelEffects::everything(&settings.0)));
}

/// Rotate the group by the current speed, once per frame
fn spin_cube(settings: Res<CubeSettings>, mut groups: Query<&mut Transform, With<CubeGroup>>) {
    let speed = settings.0.speed();
    for mut transform in &mut groups {
        transform.rotation = apply_spin(transform.rotation, speed);
    }
}

fn edge_material(color: Rgb) -> StandardMaterial {
    StandardMaterial {
        base_color: to_bevy_color(color),
        metallic: EDGE_METALLIC,
        perceptual_roughness: EDGE_ROUGHNESS,
        ..default()
    }
}

/// Replace every edge cylinder when a rebuild was requested.
///
/// Only the children change; the group transform, and with it the
/// accumulated rotation, is left alone.
fn rebuild_cube_structure(
    mut commands: Commands,
    mut applied: MessageReader<SettingsApplied>,
    settings: Res<CubeSettings>,
    mut model: ResMut<CubeModel>,
    groups: Query<Entity, With<CubeGroup>>,
    edges: Query<Entity, With<CubeEdge>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Several edits in one frame collapse into a single rebuild
    let effects = applied
        .read()
        .fold(PanelEffects::default(), |mut acc, SettingsApplied(effects)| {
            acc.merge(*effects);
            acc
        });
    if !effects.rebuild {
        return;
    }

    let Ok(group) = groups.single() else {
        tracing::warn!("Cube group missing, skipping rebuild");
        return;
    };

    model.0.rebuild(&settings.0);

    for entity in edges.iter() {
        commands.entity(entity).despawn();
    }

    let material = materials.add(edge_material(settings.0.edge_color()));
    for (index, edge) in model.0.edges().iter().enumerate() {
        let mesh = Cylinder::new(EDGE_RADIUS, edge.length)
            .mesh()
            .resolution(EDGE_RESOLUTION);
        commands.spawn((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(edge.midpoint).with_rotation(edge.rotation),
            CubeEdge { index },
            ChildOf(group),
        ));
    }

    tracing::debug!(edges = model.0.edges().len(), "Spawned cube edges");
}

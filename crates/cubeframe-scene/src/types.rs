//! Shared resources, components and messages for the cube scene

use bevy::prelude::*;
use cubeframe_core::{CubeStructure, PanelEffects, Rgb, Settings};

/// The single settings object, read by the rebuild and spin systems
#[derive(Debug, Clone, Resource, Default)]
pub struct CubeSettings(pub Settings);

/// Nodes and edges of the cube as last rebuilt
#[derive(Debug, Clone, Resource)]
pub struct CubeModel(pub CubeStructure);

impl Default for CubeModel {
    fn default() -> Self {
        Self(CubeStructure::new(&Settings::default()))
    }
}

/// Published whenever settings were written; carries what the scene must update
#[derive(Message, Debug, Clone, Copy)]
pub struct SettingsApplied(pub PanelEffects);

/// Marker for the group entity that carries the cube's accumulated rotation
#[derive(Component)]
pub struct CubeGroup;

/// One edge cylinder, child of the [`CubeGroup`]
#[derive(Component, Debug)]
pub struct CubeEdge {
    /// Position in the adjacency list
    pub index: usize,
}

/// Marker for the directional light whose intensity the panel controls
#[derive(Component)]
pub struct KeyLight;

pub fn to_bevy_color(color: Rgb) -> Color {
    Color::srgb_u8(color.r, color.g, color.b)
}

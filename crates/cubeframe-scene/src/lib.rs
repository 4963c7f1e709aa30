//! Cubeframe Scene - Bevy rendering of the wireframe cube
//!
//! This crate turns the renderer-independent model from `cubeframe-core`
//! into a live Bevy scene: an orbit camera, lighting, the spinning cube
//! group with its edge cylinders, and the egui settings panel.

pub mod camera;
pub mod scene;
pub mod structure;
pub mod types;
pub mod ui;

use bevy::prelude::*;

/// Plugin that sets up the whole cube scene
pub struct CubeScenePlugin;

impl Plugin for CubeScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(camera::CameraPlugin)
            .add_plugins(scene::SceneSetupPlugin)
            .add_plugins(structure::StructurePlugin)
            .add_plugins(ui::UiPlugin);
    }
}

// Re-export commonly used types
pub use types::*;
pub use camera::CameraSettings;

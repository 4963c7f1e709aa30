//! Bevy application setup

use bevy::prelude::*;
use bevy::winit::WinitSettings;
use bevy_egui::EguiPlugin;
use bevy_picking::DefaultPickingPlugins;
use cubeframe_scene::{CubeScenePlugin, CubeSettings};

use crate::config_loader::{initial_settings, ConfigLoaderPlugin};

/// Run the Bevy application
pub fn run() {
    let settings = initial_settings();
    tracing::info!(?settings, "Starting Cubeframe v{}", env!("CARGO_PKG_VERSION"));

    App::new()
        .insert_resource(CubeSettings(settings))
        // Continuous rendering: the cube spins every frame
        .insert_resource(WinitSettings::default())
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Cubeframe".to_string(),
                canvas: Some("canvas.webgl".to_string()),
                fit_canvas_to_parent: true,
                prevent_default_event_handling: false,
                ..default()
            }),
            ..default()
        }))
        // Picking must be added BEFORE EguiPlugin so it can detect PickingPlugin
        .add_plugins(DefaultPickingPlugins)
        .add_plugins(EguiPlugin::default())
        .add_plugins(CubeScenePlugin)
        .add_plugins(ConfigLoaderPlugin)
        .run();
}

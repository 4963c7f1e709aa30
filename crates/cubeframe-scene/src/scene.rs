//! Scene setup - lights, background, and appearance updates

use bevy::prelude::*;
use cubeframe_core::PanelEffects;

use crate::types::{to_bevy_color, CubeSettings, KeyLight, SettingsApplied};

/// Illuminance of the key light per unit of panel intensity
pub const KEY_LIGHT_LUX_PER_UNIT: f32 = 5000.0;

/// Ambient brightness per unit of relative intensity
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 500.0;

/// Relative intensity of the white fill
const AMBIENT_INTENSITY: f32 = 0.4;

/// Plugin for scene setup
pub struct SceneSetupPlugin;

impl Plugin for SceneSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SettingsApplied>()
            .add_systems(Startup, setup_lighting)
            .add_systems(Update, apply_appearance);
    }
}

pub fn key_light_illuminance(intensity: f32) -> f32 {
    intensity * KEY_LIGHT_LUX_PER_UNIT
}

fn setup_lighting(mut commands: Commands, settings: Res<CubeSettings>) {
    commands.insert_resource(ClearColor(to_bevy_color(settings.0.background_color())));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS_PER_UNIT,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: key_light_illuminance(settings.0.light_intensity()),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        KeyLight,
    ));
}

/// Background and light edits go straight to the renderer; they never touch
/// the cube geometry
fn apply_appearance(
    mut applied: MessageReader<SettingsApplied>,
    mut clear_color: ResMut<ClearColor>,
    mut lights: Query<&mut DirectionalLight, With<KeyLight>>,
) {
    let mut effects = PanelEffects::default();
    for SettingsApplied(edit) in applied.read() {
        effects.merge(*edit);
    }

    if let Some(color) = effects.clear_color {
        clear_color.0 = to_bevy_color(color);
    }
    if let Some(intensity) = effects.light_intensity {
        for mut light in &mut lights {
            light.illuminance = key_light_illuminance(intensity);
        }
    }
}

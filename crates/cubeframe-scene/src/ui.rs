//! Settings panel overlay using bevy_egui

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use cubeframe_core::{show_settings, PanelEffects, Rgb, SettingsPanel, SliderRange};

use crate::types::{CubeSettings, SettingsApplied};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SettingsApplied>()
            // Main UI system runs in EguiPrimaryContextPass for proper input handling (bevy_egui 0.38+)
            .add_systems(EguiPrimaryContextPass, settings_panel_system);
    }
}

/// [`SettingsPanel`] drawn into an egui container
struct EguiPanel<'a> {
    ui: &'a mut egui::Ui,
}

impl SettingsPanel for EguiPanel<'_> {
    fn slider(&mut self, label: &str, value: &mut f32, range: SliderRange) -> bool {
        self.ui
            .add(
                egui::Slider::new(value, range.min..=range.max)
                    .step_by(range.step as f64)
                    .text(label),
            )
            .changed()
    }

    fn color(&mut self, label: &str, value: &mut Rgb) -> bool {
        let mut rgb = value.to_array();
        let changed = self
            .ui
            .horizontal(|ui| {
                let changed = ui.color_edit_button_srgb(&mut rgb).changed();
                ui.label(label);
                changed
            })
            .inner;
        if changed {
            *value = Rgb::from(rgb);
        }
        changed
    }
}

fn settings_panel_system(
    mut contexts: EguiContexts,
    mut settings: ResMut<CubeSettings>,
    mut applied: MessageWriter<SettingsApplied>,
) {
    // Get the egui context - early return if not available
    let Ok(ctx) = contexts.ctx_mut() else { return };

    let mut effects = PanelEffects::default();
    egui::Window::new("Controls")
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .resizable(false)
        .show(ctx, |ui| {
            egui::CollapsingHeader::new("Structure Settings")
                .default_open(true)
                .show(ui, |ui| {
                    effects = show_settings(&mut EguiPanel { ui }, &mut settings.0);
                });
        });

    if !effects.is_empty() {
        tracing::debug!(?effects, "Settings changed");
        applied.write(SettingsApplied(effects));
    }
}

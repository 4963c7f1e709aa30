//! Settings panel capability and the bindings shown on it
//!
//! Any GUI able to draw a slider and a color picker can host the settings:
//! implement [`SettingsPanel`] for it and call [`show_settings`] once per
//! frame. The returned [`PanelEffects`] tell the scene what to update.

use crate::color::Rgb;
use crate::settings::{ChangeEffect, Settings, SettingsField, SliderRange};

/// Widgets a settings panel must provide.
///
/// Both methods return `true` when the user committed a new value this frame.
pub trait SettingsPanel {
    fn slider(&mut self, label: &str, value: &mut f32, range: SliderRange) -> bool;

    fn color(&mut self, label: &str, value: &mut Rgb) -> bool;
}

/// Accumulated side effects of one or more settings changes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelEffects {
    pub rebuild: bool,
    pub clear_color: Option<Rgb>,
    pub light_intensity: Option<f32>,
}

impl PanelEffects {
    /// Effects of replacing the whole settings record at once
    pub fn everything(settings: &Settings) -> Self {
        Self {
            rebuild: true,
            clear_color: Some(settings.background_color()),
            light_intensity: Some(settings.light_intensity()),
        }
    }

    pub fn push(&mut self, effect: ChangeEffect) {
        match effect {
            ChangeEffect::Rebuild => self.rebuild = true,
            ChangeEffect::ClearColor(color) => self.clear_color = Some(color),
            ChangeEffect::LightIntensity(intensity) => self.light_intensity = Some(intensity),
            ChangeEffect::Stored => {}
        }
    }

    pub fn merge(&mut self, other: PanelEffects) {
        self.rebuild |= other.rebuild;
        if other.clear_color.is_some() {
            self.clear_color = other.clear_color;
        }
        if other.light_intensity.is_some() {
            self.light_intensity = other.light_intensity;
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.rebuild && self.clear_color.is_none() && self.light_intensity.is_none()
    }
}

/// Draw every binding in panel order and route committed edits through the
/// settings setters
pub fn show_settings<P: SettingsPanel + ?Sized>(panel: &mut P, settings: &mut Settings) -> PanelEffects {
    let mut effects = PanelEffects::default();

    for field in SettingsField::ALL {
        match field {
            SettingsField::Scalar(scalar) => {
                let mut value = settings.scalar(scalar);
                if panel.slider(scalar.label(), &mut value, scalar.range()) {
                    effects.push(settings.set_scalar(scalar, value));
                }
            }
            SettingsField::Color(color) => {
                let mut value = settings.color(color);
                if panel.color(color.label(), &mut value) {
                    effects.push(settings.set_color(color, value));
                }
            }
        }
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ScalarField;

    /// Panel that commits scripted values for the named widgets
    #[derive(Default)]
    struct ScriptedPanel {
        sliders: Vec<(&'static str, f32)>,
        colors: Vec<(&'static str, Rgb)>,
        drawn: Vec<String>,
    }

    impl SettingsPanel for ScriptedPanel {
        fn slider(&mut self, label: &str, value: &mut f32, _range: SliderRange) -> bool {
            self.drawn.push(label.to_string());
            match self.sliders.iter().find(|(l, _)| *l == label) {
                Some(&(_, v)) => {
                    *value = v;
                    true
                }
                None => false,
            }
        }

        fn color(&mut self, label: &str, value: &mut Rgb) -> bool {
            self.drawn.push(label.to_string());
            match self.colors.iter().find(|(l, _)| *l == label) {
                Some(&(_, c)) => {
                    *value = c;
                    true
                }
                None => false,
            }
        }
    }

    #[test]
    fn test_idle_panel_has_no_effects() {
        let mut panel = ScriptedPanel::default();
        let mut settings = Settings::default();

        let effects = show_settings(&mut panel, &mut settings);
        assert!(effects.is_empty());
        assert_eq!(settings, Settings::default());
        assert_eq!(panel.drawn.len(), 7);
    }

    #[test]
    fn test_geometry_edits_request_rebuild() {
        for label in ["Length", "Width", "Height"] {
            let mut panel = ScriptedPanel {
                sliders: vec![(label, 1.5)],
                ..Default::default()
            };
            let mut settings = Settings::default();

            let effects = show_settings(&mut panel, &mut settings);
            assert!(effects.rebuild, "{label} should rebuild");
            assert_eq!(effects.clear_color, None);
            assert_eq!(effects.light_intensity, None);
        }

        let mut panel = ScriptedPanel {
            colors: vec![("Edge Color", Rgb::from_hex(0xff00ff))],
            ..Default::default()
        };
        let mut settings = Settings::default();
        assert!(show_settings(&mut panel, &mut settings).rebuild);
        assert_eq!(settings.edge_color(), Rgb::from_hex(0xff00ff));
    }

    #[test]
    fn test_appearance_edits_do_not_rebuild() {
        let mut panel = ScriptedPanel {
            sliders: vec![("Light Intensity", 1.25)],
            colors: vec![("Background Color", Rgb::from_hex(0x223344))],
            ..Default::default()
        };
        let mut settings = Settings::default();

        let effects = show_settings(&mut panel, &mut settings);
        assert!(!effects.rebuild);
        assert_eq!(effects.clear_color, Some(Rgb::from_hex(0x223344)));
        assert_eq!(effects.light_intensity, Some(1.25));
    }

    #[test]
    fn test_speed_is_only_stored() {
        let mut panel = ScriptedPanel {
            sliders: vec![("Rotation Speed", 0.04)],
            ..Default::default()
        };
        let mut settings = Settings::default();

        let effects = show_settings(&mut panel, &mut settings);
        assert!(effects.is_empty());
        assert_eq!(settings.scalar(ScalarField::Speed), 0.04);
    }

    #[test]
    fn test_merge_keeps_latest_values() {
        let mut effects = PanelEffects::default();
        effects.push(ChangeEffect::ClearColor(Rgb::BLACK));
        effects.merge(PanelEffects {
            rebuild: true,
            clear_color: Some(Rgb::WHITE),
            light_intensity: None,
        });

        assert!(effects.rebuild);
        assert_eq!(effects.clear_color, Some(Rgb::WHITE));
        assert_eq!(effects.light_intensity, None);
    }

    #[test]
    fn test_everything_covers_all_effects() {
        let settings = Settings::default();
        let effects = PanelEffects::everything(&settings);
        assert!(effects.rebuild);
        assert_eq!(effects.clear_color, Some(Rgb::BLACK));
        assert_eq!(effects.light_intensity, Some(0.8));
    }
}

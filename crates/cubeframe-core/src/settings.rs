//! The settings record driving geometry and render appearance
//!
//! Settings are never mutated field by field from the outside: every write
//! goes through [`Settings::set_scalar`] or [`Settings::set_color`], which
//! report the [`ChangeEffect`] the caller has to carry out.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::color::Rgb;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Slider bounds for a scalar field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

const DIMENSION_RANGE: SliderRange = SliderRange::new(0.5, 2.0, 0.1);
const SPEED_RANGE: SliderRange = SliderRange::new(0.001, 0.05, 0.001);
const LIGHT_RANGE: SliderRange = SliderRange::new(0.0, 2.0, 0.01);

/// Numeric settings, each bound to a slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Length,
    Width,
    Height,
    Speed,
    LightIntensity,
}

impl ScalarField {
    pub const ALL: [ScalarField; 5] = [
        ScalarField::Length,
        ScalarField::Width,
        ScalarField::Height,
        ScalarField::Speed,
        ScalarField::LightIntensity,
    ];

    pub fn range(self) -> SliderRange {
        match self {
            ScalarField::Length | ScalarField::Width | ScalarField::Height => DIMENSION_RANGE,
            ScalarField::Speed => SPEED_RANGE,
            ScalarField::LightIntensity => LIGHT_RANGE,
        }
    }

    /// Serialized name, also used for URL overrides
    pub fn key(self) -> &'static str {
        match self {
            ScalarField::Length => "length",
            ScalarField::Width => "width",
            ScalarField::Height => "height",
            ScalarField::Speed => "speed",
            ScalarField::LightIntensity => "lightIntensity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScalarField::Length => "Length",
            ScalarField::Width => "Width",
            ScalarField::Height => "Height",
            ScalarField::Speed => "Rotation Speed",
            ScalarField::LightIntensity => "Light Intensity",
        }
    }
}

/// Color settings, each bound to a color picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorField {
    EdgeColor,
    BackgroundColor,
}

impl ColorField {
    pub fn key(self) -> &'static str {
        match self {
            ColorField::EdgeColor => "edgeColor",
            ColorField::BackgroundColor => "backgroundColor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorField::EdgeColor => "Edge Color",
            ColorField::BackgroundColor => "Background Color",
        }
    }
}

/// Any settings field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    Scalar(ScalarField),
    Color(ColorField),
}

impl SettingsField {
    /// All fields in panel order
    pub const ALL: [SettingsField; 7] = [
        SettingsField::Scalar(ScalarField::Length),
        SettingsField::Scalar(ScalarField::Width),
        SettingsField::Scalar(ScalarField::Height),
        SettingsField::Color(ColorField::EdgeColor),
        SettingsField::Scalar(ScalarField::Speed),
        SettingsField::Color(ColorField::BackgroundColor),
        SettingsField::Scalar(ScalarField::LightIntensity),
    ];

    pub fn key(self) -> &'static str {
        match self {
            SettingsField::Scalar(field) => field.key(),
            SettingsField::Color(field) => field.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingsField::Scalar(field) => field.label(),
            SettingsField::Color(field) => field.label(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What a settings write requires from the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeEffect {
    /// Geometry or edge color changed: the cube structure must be rebuilt
    Rebuild,
    /// Renderer clear color changed
    ClearColor(Rgb),
    /// Key light intensity changed
    LightIntensity(f32),
    /// Nothing to do beyond storing; read again on the next frame
    Stored,
}

/// Parameters of the cube and its surroundings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    length: f32,
    width: f32,
    height: f32,
    edge_color: Rgb,
    background_color: Rgb,
    light_intensity: f32,
    /// Radians per frame
    speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 1.0,
            width: 1.0,
            height: 1.0,
            edge_color: Rgb::from_hex(0x00ff00),
            background_color: Rgb::from_hex(0x000000),
            light_intensity: 0.8,
            speed: 0.01,
        }
    }
}

impl Settings {
    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn edge_color(&self) -> Rgb {
        self.edge_color
    }

    pub fn background_color(&self) -> Rgb {
        self.background_color
    }

    pub fn light_intensity(&self) -> f32 {
        self.light_intensity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn scalar(&self, field: ScalarField) -> f32 {
        match field {
            ScalarField::Length => self.length,
            ScalarField::Width => self.width,
            ScalarField::Height => self.height,
            ScalarField::Speed => self.speed,
            ScalarField::LightIntensity => self.light_intensity,
        }
    }

    pub fn color(&self, field: ColorField) -> Rgb {
        match field {
            ColorField::EdgeColor => self.edge_color,
            ColorField::BackgroundColor => self.background_color,
        }
    }

    /// Store a scalar, clamped into its slider range.
    ///
    /// Non-finite values leave the field unchanged.
    pub fn set_scalar(&mut self, field: ScalarField, value: f32) -> ChangeEffect {
        if value.is_finite() {
            let value = field.range().clamp(value);
            let slot = match field {
                ScalarField::Length => &mut self.length,
                ScalarField::Width => &mut self.width,
                ScalarField::Height => &mut self.height,
                ScalarField::Speed => &mut self.speed,
                ScalarField::LightIntensity => &mut self.light_intensity,
            };
            *slot = value;
        }

        match field {
            ScalarField::Length | ScalarField::Width | ScalarField::Height => ChangeEffect::Rebuild,
            ScalarField::Speed => ChangeEffect::Stored,
            ScalarField::LightIntensity => ChangeEffect::LightIntensity(self.light_intensity),
        }
    }

    pub fn set_color(&mut self, field: ColorField, color: Rgb) -> ChangeEffect {
        match field {
            ColorField::EdgeColor => {
                self.edge_color = color;
                ChangeEffect::Rebuild
            }
            ColorField::BackgroundColor => {
                self.background_color = color;
                ChangeEffect::ClearColor(color)
            }
        }
    }

    /// Check every scalar against its slider range
    pub fn validate(&self) -> Result<(), SettingsError> {
        for field in ScalarField::ALL {
            check_scalar(field, self.scalar(field))?;
        }
        Ok(())
    }
}

pub(crate) fn check_scalar(field: ScalarField, value: f32) -> Result<(), SettingsError> {
    if !value.is_finite() {
        return Err(SettingsError::NonFinite { field: field.key() });
    }
    let range = field.range();
    if !range.contains(value) {
        return Err(SettingsError::OutOfRange {
            field: field.key(),
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

//! Loading settings from TOML documents and key/value overrides

use thiserror::Error;
use tracing::debug;

use crate::color::{ColorError, Rgb};
use crate::settings::{check_scalar, ChangeEffect, Settings, SettingsError, SettingsField};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Unknown setting: {0}")]
    UnknownKey(String),
    #[error("Invalid number for {key}: {value:?}")]
    InvalidNumber { key: String, value: String },
    #[error("Invalid color for {key}: {source}")]
    InvalidColor {
        key: String,
        #[source]
        source: ColorError,
    },
    #[error("Invalid settings: {0}")]
    Invalid(#[from] SettingsError),
}

impl Settings {
    /// Parse a settings document. Missing keys keep their defaults.
    ///
    /// ```toml
    /// length = 1.5
    /// edgeColor = "#ff8800"
    /// speed = 0.02
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply one `key=value` override, e.g. from a URL query string.
    ///
    /// Unlike the panel setters, out-of-range numbers are rejected rather
    /// than clamped.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<ChangeEffect, ConfigError> {
        let field =
            SettingsField::from_key(key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        let effect = match field {
            SettingsField::Scalar(scalar) => {
                let parsed: f32 =
                    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                check_scalar(scalar, parsed)?;
                self.set_scalar(scalar, parsed)
            }
            SettingsField::Color(color) => {
                let parsed: Rgb = value.parse().map_err(|source| ConfigError::InvalidColor {
                    key: key.to_string(),
                    source,
                })?;
                self.set_color(color, parsed)
            }
        };

        debug!(%field, value, "Applied settings override");
        Ok(effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_keeps_defaults() {
        let settings = Settings::from_toml(
            r##"
length = 1.5
edgeColor = "#ff8800"
"##,
        )
        .unwrap();

        assert_eq!(settings.length(), 1.5);
        assert_eq!(settings.edge_color(), Rgb::new(255, 136, 0));
        assert_eq!(settings.width(), 1.0);
        assert_eq!(settings.speed(), 0.01);
    }

    #[test]
    fn test_full_document() {
        let settings = Settings::from_toml(
            r##"
length = 2.0
width = 0.5
height = 1.2
edgeColor = "#ffffff"
backgroundColor = "#102030"
lightIntensity = 1.5
speed = 0.05
"##,
        )
        .unwrap();

        assert_eq!(settings.background_color(), Rgb::new(0x10, 0x20, 0x30));
        assert_eq!(settings.light_intensity(), 1.5);
        assert_eq!(settings.speed(), 0.05);
    }

    #[test]
    fn test_document_errors() {
        assert!(matches!(
            Settings::from_toml("depth = 1.0"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_toml("edgeColor = \"green\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_toml("height = 5.0"),
            Err(ConfigError::Invalid(SettingsError::OutOfRange { field: "height", .. }))
        ));
    }

    #[test]
    fn test_overrides() {
        let mut settings = Settings::default();

        assert_eq!(
            settings.apply_override("width", "1.7").unwrap(),
            ChangeEffect::Rebuild
        );
        assert_eq!(settings.width(), 1.7);

        assert_eq!(
            settings.apply_override("backgroundColor", "#202020").unwrap(),
            ChangeEffect::ClearColor(Rgb::new(0x20, 0x20, 0x20))
        );

        assert!(matches!(
            settings.apply_override("depth", "1.0"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            settings.apply_override("speed", "fast"),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            settings.apply_override("speed", "0.5"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            settings.apply_override("edgeColor", "#12"),
            Err(ConfigError::InvalidColor { .. })
        ));

        // Rejected overrides leave the previous values in place
        assert_eq!(settings.speed(), 0.01);
        assert_eq!(settings.edge_color(), Rgb::new(0, 255, 0));
    }
}

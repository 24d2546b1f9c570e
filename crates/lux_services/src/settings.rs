//! Settings management

use lux_core::math::{Color, Vec3};
use lux_core::LightType;
use lux_light::{
    IndirectLightBuilder, LightBuilder, SkyboxBuilder, DEFAULT_MAIN_LIGHT_INTENSITY,
    SUNNY_DAY_MAIN_LIGHT_INTENSITY,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Engine settings
///
/// Every field has a default, so a settings file only needs the values it
/// wants to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub lighting: LightingSettings,
    pub environment: EnvironmentSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingSettings {
    pub main_light_intensity: f32,
    pub sunny_day_intensity: f32,
    pub main_light_direction: Vec3,
    pub main_light_color: Color,
    pub cast_shadows: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSettings {
    pub indirect_light_intensity: f32,
    pub skybox_color: Color,
    pub show_sun: bool,
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            main_light_intensity: DEFAULT_MAIN_LIGHT_INTENSITY,
            sunny_day_intensity: SUNNY_DAY_MAIN_LIGHT_INTENSITY,
            main_light_direction: Vec3::NEG_Y,
            main_light_color: Color::WHITE,
            cast_shadows: true,
        }
    }
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            indirect_light_intensity: 30_000.0,
            skybox_color: Color::BLACK,
            show_sun: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let settings = Self::from_json(&std::fs::read_to_string(path)?)?;
        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }
}

impl LightingSettings {
    /// Directional main light at the configured intensity.
    pub fn main_light(&self) -> LightBuilder {
        LightBuilder::new(LightType::Directional)
            .direction(self.main_light_direction)
            .color(self.main_light_color)
            .intensity(self.main_light_intensity)
            .cast_shadows(self.cast_shadows)
    }

    /// Sun light at sunny-day intensity, same direction and color.
    pub fn sun(&self) -> LightBuilder {
        LightBuilder::new(LightType::Sun)
            .direction(self.main_light_direction)
            .color(self.main_light_color)
            .intensity(self.sunny_day_intensity)
            .cast_shadows(self.cast_shadows)
    }
}

impl EnvironmentSettings {
    pub fn indirect_light(&self) -> IndirectLightBuilder {
        IndirectLightBuilder::new().intensity(self.indirect_light_intensity)
    }

    pub fn skybox(&self) -> SkyboxBuilder {
        SkyboxBuilder::new()
            .color(self.skybox_color)
            .show_sun(self.show_sun)
    }
}

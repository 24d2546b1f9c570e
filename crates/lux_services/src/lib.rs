//! Lux Services Layer
//!
//! Platform-facing services. Today that is settings: the default light and
//! environment parameters, loaded from JSON.

pub mod settings;

pub use settings::{EnvironmentSettings, LightingSettings, Settings, SettingsError};

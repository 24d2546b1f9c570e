//! Lux Light
//!
//! Typed handles over lights and environments owned by a rendering engine.
//!
//! Nothing here keeps state. Every accessor takes the engine explicitly,
//! resolves the light's component slot, and reads or writes straight through:
//!
//! ```ignore
//! use lux_light::{Light, LightBuilder};
//! use lux_core::LightType;
//!
//! let sun = LightBuilder::new(LightType::Sun)
//!     .intensity(lux_light::SUNNY_DAY_MAIN_LIGHT_INTENSITY)
//!     .cast_shadows(true)
//!     .build(&mut engine)?;
//! sun.set_intensity(&mut engine, 80_000.0);
//! ```
//!
//! All handles must come from this crate's builders (or the engine) and must
//! not be used after they are destroyed. Neither is checked.

pub mod environment;
pub mod indirect;
pub mod light;

pub use environment::{apply_environment, Environment, SceneExt};
pub use indirect::{destroy_indirect_light, destroy_skybox, IndirectLightBuilder, SkyboxBuilder};
pub use light::{ConeUpdate, Light, LightBuilder};

/// Default directional light intensity (lux).
pub const DEFAULT_MAIN_LIGHT_INTENSITY: f32 = 5_000.0;

/// Sun intensity on a sunny day (lux).
pub const SUNNY_DAY_MAIN_LIGHT_INTENSITY: f32 = 100_000.0;

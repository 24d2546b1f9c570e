//! Lux Core
//!
//! Shared vocabulary for the light/environment adapter:
//! - Opaque engine handles (entities, light instances, indirect lights, skyboxes)
//! - Math aliases and linear colors
//! - Construction descriptors handed to the engine
//! - The engine capability traits that form the external boundary

pub mod desc;
pub mod engine;
pub mod entity;
pub mod error;
pub mod handle;
pub mod math;

pub use desc::{IndirectLightDesc, LightDesc, LightType, SkyboxDesc};
pub use engine::{Engine, EntityManager, LightManager, Scene};
pub use entity::{Entity, EntityAllocator};
pub use error::LightError;
pub use handle::{IndirectLight, LightInstance, Skybox, Texture};
pub use math::Color;

pub use glam;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

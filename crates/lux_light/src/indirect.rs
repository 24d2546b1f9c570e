//! Indirect light and skybox lifecycle
//!
//! Thin builders that hand the finished descriptor to the engine passed in,
//! so callers never reach for a global engine.

use lux_core::math::{Color, Mat3, Vec3};
use lux_core::{Engine, IndirectLight, IndirectLightDesc, LightError, Skybox, SkyboxDesc, Texture};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndirectLightBuilder {
    desc: IndirectLightDesc,
}

impl IndirectLightBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn desc(&self) -> &IndirectLightDesc {
        &self.desc
    }

    /// Environment intensity in lux.
    pub fn intensity(mut self, intensity: f32) -> Self {
        self.desc.intensity = intensity;
        self
    }

    pub fn rotation(mut self, rotation: Mat3) -> Self {
        self.desc.rotation = rotation;
        self
    }

    /// Spherical harmonics for diffuse lighting: 1, 4 or 9 coefficients.
    pub fn irradiance(mut self, coefficients: impl Into<Vec<Vec3>>) -> Self {
        self.desc.irradiance = Some(coefficients.into());
        self
    }

    /// Pre-filtered cubemap for specular reflections.
    pub fn reflections(mut self, cubemap: Texture) -> Self {
        self.desc.reflections = Some(cubemap);
        self
    }

    pub fn build<E: Engine>(&self, engine: &mut E) -> Result<IndirectLight, LightError> {
        if let Some(coefficients) = &self.desc.irradiance {
            if !matches!(coefficients.len(), 1 | 4 | 9) {
                return Err(LightError::InvalidIrradiance {
                    coefficients: coefficients.len(),
                });
            }
        }
        let indirect_light = engine.create_indirect_light(&self.desc)?;
        tracing::debug!(id = indirect_light.id(), "indirect light built");
        Ok(indirect_light)
    }
}

/// Release an indirect light. It must not still be set on a scene.
pub fn destroy_indirect_light<E: Engine>(engine: &mut E, indirect_light: IndirectLight) {
    engine.destroy_indirect_light(indirect_light);
    tracing::debug!(id = indirect_light.id(), "indirect light destroyed");
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkyboxBuilder {
    desc: SkyboxDesc,
}

impl SkyboxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn desc(&self) -> &SkyboxDesc {
        &self.desc
    }

    /// Solid background color, used when no environment cubemap is set.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.desc.color = Some(color.into());
        self
    }

    pub fn environment(mut self, cubemap: Texture) -> Self {
        self.desc.environment = Some(cubemap);
        self
    }

    pub fn intensity(mut self, intensity: f32) -> Self {
        self.desc.intensity = intensity;
        self
    }

    pub fn show_sun(mut self, show: bool) -> Self {
        self.desc.show_sun = show;
        self
    }

    pub fn build<E: Engine>(&self, engine: &mut E) -> Result<Skybox, LightError> {
        let skybox = engine.create_skybox(&self.desc)?;
        tracing::debug!(id = skybox.id(), "skybox built");
        Ok(skybox)
    }
}

/// Release a skybox. It must not still be set on a scene.
pub fn destroy_skybox<E: Engine>(engine: &mut E, skybox: Skybox) {
    engine.destroy_skybox(skybox);
    tracing::debug!(id = skybox.id(), "skybox destroyed");
}

//! Engine capability traits
//!
//! This is the whole surface the adapter needs from a native rendering
//! engine. Implementations own all state; the adapter holds none and passes
//! the engine explicitly into every call.
//!
//! Getters and setters keyed by [`LightInstance`] follow the engine's own
//! contract for invalid instances. Callers resolve an instance with
//! [`LightManager::instance`] right before use and never keep it.

use crate::desc::{IndirectLightDesc, LightDesc, LightType, SkyboxDesc};
use crate::entity::Entity;
use crate::error::LightError;
use crate::handle::{IndirectLight, LightInstance, Skybox};
use crate::math::{Color, Vec3};

/// Entity allocation and release.
pub trait EntityManager {
    fn create(&mut self) -> Entity;
    fn destroy(&mut self, entity: Entity);
    fn is_alive(&self, entity: Entity) -> bool;
}

/// Light component storage.
pub trait LightManager {
    /// Resolve the light slot for an entity, or [`LightInstance::INVALID`].
    fn instance(&self, entity: Entity) -> LightInstance;
    fn has_component(&self, entity: Entity) -> bool;

    /// Attach a light component to an existing entity.
    fn create(&mut self, entity: Entity, desc: &LightDesc) -> Result<(), LightError>;
    /// Detach the light component. The entity itself is untouched.
    fn destroy(&mut self, entity: Entity);

    fn light_type(&self, instance: LightInstance) -> LightType;

    fn position(&self, instance: LightInstance) -> Vec3;
    fn set_position(&mut self, instance: LightInstance, position: Vec3);

    fn direction(&self, instance: LightInstance) -> Vec3;
    fn set_direction(&mut self, instance: LightInstance, direction: Vec3);

    fn intensity(&self, instance: LightInstance) -> f32;
    fn set_intensity(&mut self, instance: LightInstance, intensity: f32);

    fn color(&self, instance: LightInstance) -> Color;
    fn set_color(&mut self, instance: LightInstance, color: Color);

    fn is_shadow_caster(&self, instance: LightInstance) -> bool;
    fn set_shadow_caster(&mut self, instance: LightInstance, shadow_caster: bool);

    fn falloff(&self, instance: LightInstance) -> f32;
    fn set_falloff(&mut self, instance: LightInstance, falloff: f32);

    fn sun_halo_falloff(&self, instance: LightInstance) -> f32;
    fn set_sun_halo_falloff(&mut self, instance: LightInstance, falloff: f32);

    fn sun_halo_size(&self, instance: LightInstance) -> f32;
    fn set_sun_halo_size(&mut self, instance: LightInstance, size: f32);

    fn sun_angular_radius(&self, instance: LightInstance) -> f32;
    fn set_sun_angular_radius(&mut self, instance: LightInstance, degrees: f32);

    fn inner_cone_angle(&self, instance: LightInstance) -> f32;
    fn outer_cone_angle(&self, instance: LightInstance) -> f32;
    /// The engine only accepts both cone angles together.
    fn set_spot_light_cone(&mut self, instance: LightInstance, inner: f32, outer: f32);
}

/// Engine context: owns the managers and the IBL/skybox resources.
pub trait Engine {
    type Entities: EntityManager;
    type Lights: LightManager;

    fn entity_manager(&self) -> &Self::Entities;
    fn entity_manager_mut(&mut self) -> &mut Self::Entities;
    fn light_manager(&self) -> &Self::Lights;
    fn light_manager_mut(&mut self) -> &mut Self::Lights;

    fn create_indirect_light(&mut self, desc: &IndirectLightDesc)
        -> Result<IndirectLight, LightError>;
    fn destroy_indirect_light(&mut self, indirect_light: IndirectLight);

    fn create_skybox(&mut self, desc: &SkyboxDesc) -> Result<Skybox, LightError>;
    fn destroy_skybox(&mut self, skybox: Skybox);
}

/// Scene container with a single indirect light and skybox slot.
pub trait Scene {
    fn indirect_light(&self) -> Option<IndirectLight>;
    fn set_indirect_light(&mut self, indirect_light: Option<IndirectLight>);

    fn skybox(&self) -> Option<Skybox>;
    fn set_skybox(&mut self, skybox: Option<Skybox>);
}

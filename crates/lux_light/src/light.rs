//! Light handles
//!
//! A [`Light`] is an entity that carries a light component. Accessors resolve
//! the component slot on every call and never cache it, since the engine is
//! free to move slots between calls.

use lux_core::math::{Color, Vec3};
use lux_core::{
    Engine, Entity, EntityManager, LightDesc, LightError, LightInstance, LightManager, LightType,
};

/// Handle to a light entity.
///
/// The handle is `Copy` and carries no ownership. After [`Light::destroy`]
/// every copy is dangling; using one is a caller error that goes undetected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Light(Entity);

impl Light {
    /// Wrap an entity the engine already gave a light component.
    pub fn from_entity(entity: Entity) -> Self {
        Self(entity)
    }

    pub fn entity(self) -> Entity {
        self.0
    }

    /// Resolve the current light slot. Valid only until the next engine call.
    pub fn instance<E: Engine>(self, engine: &E) -> LightInstance {
        engine.light_manager().instance(self.0)
    }

    /// Whether the engine still has a light component for this entity.
    ///
    /// Accessors never call this; it is here for callers that want to check.
    pub fn is_alive<E: Engine>(self, engine: &E) -> bool {
        engine.light_manager().has_component(self.0)
    }

    pub fn light_type<E: Engine>(self, engine: &E) -> LightType {
        let lights = engine.light_manager();
        lights.light_type(lights.instance(self.0))
    }

    pub fn position<E: Engine>(self, engine: &E) -> Vec3 {
        let lights = engine.light_manager();
        lights.position(lights.instance(self.0))
    }

    pub fn set_position<E: Engine>(self, engine: &mut E, position: Vec3) {
        let lights = engine.light_manager_mut();
        let instance = lights.instance(self.0);
        lights.set_position(instance, position);
    }

    pub fn direction<E: Engine>(self, engine: &E) -> Vec3 {
        let lights = engine.light_manager();
        lights.direction(lights.instance(self.0))
    }

    pub fn set_direction<E: Engine>(self, engine: &mut E, direction: Vec3) {
        let lights = engine.light_manager_mut();
        let instance = lights.instance(self.0);
        lights.set_direction(instance, direction);
    }

    pub fn intensity<E: Engine>(self, engine: &E) -> f32 {
        let lights = engine.light_manager();
        lights.intensity(lights.instance(self.0))
    }

    pub fn set_intensity<E: Engine>(self, engine: &mut E, intensity: f32) {
        let lights = engine.light_manager_mut();
        let instance = lights.instance(self.0);
        lights.set_intensity(instance, intensity);
    }

    pub fn color<E: Engine>(self, engine: &E) -> Color {
        let lights = engine.light_manager();
        lights.color(lights.instance(self.0))
    }

    pub fn set_color<E: Engine>(self, engine: &mut E, color: impl Into<Color>) {
        let lights = engine.light_manager_mut();
        let instance = lights.instance(self.0);
        lights.set_color(instance, color.into());
    }

    pub fn is_shadow_caster<E: Engine>(self, engine: &E) -> bool {
        let lights = engine.light_manager();
        lights.is_shadow_caster(lights.instance(self.0))
    }

    pub fn set_shadow_caster<E: Engine>(self, engine: &mut E, shadow_caster: bool) {
        let lights = engine.light_manager_mut();
        let instance = lights.instance(self.0);
        lights.set_shadow_caster(instance, shadow_caster);
    }

    pub fn falloff<E: Engine>(self, engine: &E) -> f32 {
        let lights = engine.light_manager();
        lights.falloff(lights.instance(self.0))
    }

    pub fn set_falloff<E: Engine>(self, engine: &mut E, falloff: f32) {
        let lights = engine.light_manager_mut();
        let instance = lights.instance(self.0);
        lights.set_falloff(instance, falloff);
    }

    pub fn sun_halo_falloff<E: Engine>(self, engine: &E) -> f32 {
        let lights = engine.light_manager();
        lights.sun_halo_falloff(lights.instance(self.0))
    }

    pub fn set_sun_halo_falloff<E: Engine>(self, engine: &mut E, falloff: f32) {
        let lights = engine.light_manager_mut();
        let instance = lights.instance(self.0);
        lights.set_sun_halo_falloff(instance, falloff);
    }

    pub fn sun_halo_size<E: Engine>(self, engine: &E) -> f32 {
        let lights = engine.light_manager();
        lights.sun_halo_size(lights.instance(self.0))
    }

    pub fn set_sun_halo_size<E: Engine>(self, engine: &mut E, size: f32) {
        let lights = engine.light_manager_mut();
        let instance = lights.instance(self.0);
        lights.set_sun_halo_size(instance, size);
    }

    /// Angular radius of the sun disk, in degrees.
    pub fn sun_angular_radius<E: Engine>(self, engine: &E) -> f32 {
        let lights = engine.light_manager();
        lights.sun_angular_radius(lights.instance(self.0))
    }

    pub fn set_sun_angular_radius<E: Engine>(self, engine: &mut E, degrees: f32) {
        let lights = engine.light_manager_mut();
        let instance = lights.instance(self.0);
        lights.set_sun_angular_radius(instance, degrees);
    }

    /// Inner spot cone angle, in radians.
    pub fn inner_cone_angle<E: Engine>(self, engine: &E) -> f32 {
        let lights = engine.light_manager();
        lights.inner_cone_angle(lights.instance(self.0))
    }

    /// Outer spot cone angle, in radians.
    pub fn outer_cone_angle<E: Engine>(self, engine: &E) -> f32 {
        let lights = engine.light_manager();
        lights.outer_cone_angle(lights.instance(self.0))
    }

    pub fn set_inner_cone_angle<E: Engine>(self, engine: &mut E, inner: f32) {
        self.update_cone(engine, ConeUpdate::inner(inner));
    }

    pub fn set_outer_cone_angle<E: Engine>(self, engine: &mut E, outer: f32) {
        self.update_cone(engine, ConeUpdate::outer(outer));
    }

    /// Write the spot cone in one engine call.
    ///
    /// The engine only takes both angles at once, so any half left as `None`
    /// is read back first and written unchanged.
    pub fn update_cone<E: Engine>(self, engine: &mut E, update: ConeUpdate) {
        let lights = engine.light_manager_mut();
        let instance = lights.instance(self.0);
        let inner = update
            .inner
            .unwrap_or_else(|| lights.inner_cone_angle(instance));
        let outer = update
            .outer
            .unwrap_or_else(|| lights.outer_cone_angle(instance));
        lights.set_spot_light_cone(instance, inner, outer);
    }

    /// Read every enumerated attribute into a builder.
    pub fn snapshot<E: Engine>(self, engine: &E) -> LightBuilder {
        let lights = engine.light_manager();
        let instance = lights.instance(self.0);
        LightBuilder::from_desc(LightDesc {
            light_type: lights.light_type(instance),
            cast_shadows: lights.is_shadow_caster(instance),
            position: lights.position(instance),
            direction: lights.direction(instance),
            intensity: lights.intensity(instance),
            color: lights.color(instance),
            falloff: lights.falloff(instance),
            sun_halo_falloff: lights.sun_halo_falloff(instance),
            sun_halo_size: lights.sun_halo_size(instance),
            sun_angular_radius: lights.sun_angular_radius(instance),
            inner_cone_angle: lights.inner_cone_angle(instance),
            outer_cone_angle: lights.outer_cone_angle(instance),
        })
    }

    /// Build a new, independent light with this light's current attributes.
    ///
    /// The engine has no copy primitive, so this goes through
    /// [`Light::snapshot`] and rebuilds. Anything the engine stores beyond the
    /// enumerated attributes is not carried over.
    pub fn duplicate<E: Engine>(self, engine: &mut E) -> Result<Light, LightError> {
        let copy = self.snapshot(engine).build(engine)?;
        tracing::debug!(source = %self.0, copy = %copy.0, "light duplicated");
        Ok(copy)
    }

    /// Release the light component. The entity stays alive.
    ///
    /// Use this for lights made with [`LightBuilder::attach`], where the
    /// caller owns the entity.
    pub fn destroy<E: Engine>(self, engine: &mut E) {
        engine.light_manager_mut().destroy(self.0);
        tracing::debug!(entity = %self.0, "light destroyed");
    }

    /// Release the light component and then the entity.
    ///
    /// For lights made with [`LightBuilder::build`] or [`Light::duplicate`],
    /// which allocated the entity themselves.
    pub fn destroy_with_entity<E: Engine>(self, engine: &mut E) {
        self.destroy(engine);
        engine.entity_manager_mut().destroy(self.0);
    }
}

impl From<Light> for Entity {
    fn from(light: Light) -> Self {
        light.0
    }
}

/// Spot cone write with optional halves.
///
/// `None` means "keep the current value".
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ConeUpdate {
    pub inner: Option<f32>,
    pub outer: Option<f32>,
}

impl ConeUpdate {
    pub fn inner(inner: f32) -> Self {
        Self {
            inner: Some(inner),
            outer: None,
        }
    }

    pub fn outer(outer: f32) -> Self {
        Self {
            inner: None,
            outer: Some(outer),
        }
    }

    pub fn both(inner: f32, outer: f32) -> Self {
        Self {
            inner: Some(inner),
            outer: Some(outer),
        }
    }
}

/// Fluent light construction.
///
/// Starts from the engine's defaults for every attribute. [`LightBuilder::build`]
/// is the only place this crate creates light entities.
#[derive(Debug, Clone, PartialEq)]
pub struct LightBuilder {
    desc: LightDesc,
}

impl LightBuilder {
    pub fn new(light_type: LightType) -> Self {
        Self {
            desc: LightDesc::new(light_type),
        }
    }

    pub fn from_desc(desc: LightDesc) -> Self {
        Self { desc }
    }

    pub fn desc(&self) -> &LightDesc {
        &self.desc
    }

    pub fn into_desc(self) -> LightDesc {
        self.desc
    }

    pub fn cast_shadows(mut self, enable: bool) -> Self {
        self.desc.cast_shadows = enable;
        self
    }

    pub fn position(mut self, position: Vec3) -> Self {
        self.desc.position = position;
        self
    }

    pub fn direction(mut self, direction: Vec3) -> Self {
        self.desc.direction = direction;
        self
    }

    pub fn intensity(mut self, intensity: f32) -> Self {
        self.desc.intensity = intensity;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.desc.color = color.into();
        self
    }

    pub fn falloff(mut self, radius: f32) -> Self {
        self.desc.falloff = radius;
        self
    }

    pub fn sun_halo_falloff(mut self, falloff: f32) -> Self {
        self.desc.sun_halo_falloff = falloff;
        self
    }

    pub fn sun_halo_size(mut self, size: f32) -> Self {
        self.desc.sun_halo_size = size;
        self
    }

    pub fn sun_angular_radius(mut self, degrees: f32) -> Self {
        self.desc.sun_angular_radius = degrees;
        self
    }

    /// Inner and outer cone angles in radians. Inner should not exceed outer;
    /// that is the engine's call to enforce.
    pub fn spot_light_cone(mut self, inner: f32, outer: f32) -> Self {
        self.desc.inner_cone_angle = inner;
        self.desc.outer_cone_angle = outer;
        self
    }

    /// Allocate a fresh entity and register it as a light.
    ///
    /// If the engine rejects the light, the entity is released again before
    /// the error is returned.
    pub fn build<E: Engine>(&self, engine: &mut E) -> Result<Light, LightError> {
        let entity = engine.entity_manager_mut().create();
        if let Err(err) = engine.light_manager_mut().create(entity, &self.desc) {
            engine.entity_manager_mut().destroy(entity);
            tracing::warn!(%entity, error = %err, "light build rejected");
            return Err(err);
        }
        tracing::debug!(%entity, light_type = ?self.desc.light_type, "light built");
        Ok(Light(entity))
    }

    /// Register an existing, live entity as a light.
    ///
    /// The entity stays the caller's; [`Light::destroy`] leaves it alive.
    pub fn attach<E: Engine>(&self, engine: &mut E, entity: Entity) -> Result<Light, LightError> {
        if !engine.entity_manager().is_alive(entity) {
            return Err(LightError::DeadEntity(entity));
        }
        engine.light_manager_mut().create(entity, &self.desc)?;
        tracing::debug!(%entity, light_type = ?self.desc.light_type, "light attached");
        Ok(Light(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_render::HeadlessEngine;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8};

    fn spot(engine: &mut HeadlessEngine) -> Light {
        LightBuilder::new(LightType::Spot)
            .position(Vec3::new(1.0, 2.0, 3.0))
            .direction(Vec3::NEG_Z)
            .intensity(800.0)
            .color(Color::new(1.0, 0.5, 0.25))
            .falloff(12.0)
            .spot_light_cone(FRAC_PI_8, FRAC_PI_4)
            .build(engine)
            .unwrap()
    }

    #[test]
    fn build_registers_light() {
        let mut engine = HeadlessEngine::new();
        let light = spot(&mut engine);
        assert!(light.is_alive(&engine));
        assert!(light.instance(&engine).is_valid());
        assert_eq!(light.light_type(&engine), LightType::Spot);
        assert_eq!(light.position(&engine), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(light.inner_cone_angle(&engine), FRAC_PI_8);
        assert_eq!(light.outer_cone_angle(&engine), FRAC_PI_4);
    }

    #[test]
    fn setters_round_trip() {
        let mut engine = HeadlessEngine::new();
        let light = spot(&mut engine);

        light.set_position(&mut engine, Vec3::new(-4.0, 0.5, 9.0));
        assert_eq!(light.position(&engine), Vec3::new(-4.0, 0.5, 9.0));

        light.set_direction(&mut engine, Vec3::X);
        assert_eq!(light.direction(&engine), Vec3::X);

        light.set_intensity(&mut engine, 1234.5);
        assert_eq!(light.intensity(&engine), 1234.5);

        light.set_color(&mut engine, Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(light.color(&engine), Color::new(0.1, 0.2, 0.3));

        light.set_shadow_caster(&mut engine, true);
        assert!(light.is_shadow_caster(&engine));
        light.set_shadow_caster(&mut engine, false);
        assert!(!light.is_shadow_caster(&engine));

        light.set_falloff(&mut engine, 42.0);
        assert_eq!(light.falloff(&engine), 42.0);

        light.set_sun_halo_falloff(&mut engine, 60.0);
        assert_eq!(light.sun_halo_falloff(&engine), 60.0);

        light.set_sun_halo_size(&mut engine, 7.5);
        assert_eq!(light.sun_halo_size(&engine), 7.5);

        light.set_sun_angular_radius(&mut engine, 1.9);
        assert_eq!(light.sun_angular_radius(&engine), 1.9);

        light.set_inner_cone_angle(&mut engine, 0.2);
        assert_eq!(light.inner_cone_angle(&engine), 0.2);

        light.set_outer_cone_angle(&mut engine, 1.1);
        assert_eq!(light.outer_cone_angle(&engine), 1.1);
    }

    #[test]
    fn inner_cone_leaves_outer_alone() {
        let mut engine = HeadlessEngine::new();
        let light = spot(&mut engine);

        light.set_inner_cone_angle(&mut engine, 0.1);
        assert_eq!(light.inner_cone_angle(&engine), 0.1);
        assert_eq!(light.outer_cone_angle(&engine), FRAC_PI_4);
    }

    #[test]
    fn outer_cone_leaves_inner_alone() {
        let mut engine = HeadlessEngine::new();
        let light = spot(&mut engine);

        light.set_outer_cone_angle(&mut engine, FRAC_PI_2);
        assert_eq!(light.outer_cone_angle(&engine), FRAC_PI_2);
        assert_eq!(light.inner_cone_angle(&engine), FRAC_PI_8);
    }

    #[test]
    fn cone_update_is_a_single_engine_write() {
        let mut engine = HeadlessEngine::new();
        let light = spot(&mut engine);

        light.update_cone(&mut engine, ConeUpdate::both(0.3, 0.6));
        assert_eq!(light.inner_cone_angle(&engine), 0.3);
        assert_eq!(light.outer_cone_angle(&engine), 0.6);

        // Nothing requested: current values are written back unchanged.
        light.update_cone(&mut engine, ConeUpdate::default());
        assert_eq!(light.inner_cone_angle(&engine), 0.3);
        assert_eq!(light.outer_cone_angle(&engine), 0.6);

        assert_eq!(engine.light_manager().calls().get("light.set_spot_light_cone"), 2);
    }

    #[test]
    fn duplicate_copies_every_attribute() {
        let mut engine = HeadlessEngine::new();
        let source = spot(&mut engine);
        source.set_shadow_caster(&mut engine, true);
        source.set_sun_halo_size(&mut engine, 3.0);

        let copy = source.duplicate(&mut engine).unwrap();
        assert_ne!(copy, source);
        assert_ne!(copy.entity(), source.entity());
        assert_eq!(copy.snapshot(&engine), source.snapshot(&engine));
        assert_eq!(engine.light_manager().len(), 2);
    }

    #[test]
    fn duplicate_is_independent_of_source() {
        let mut engine = HeadlessEngine::new();
        let source = spot(&mut engine);
        let copy = source.duplicate(&mut engine).unwrap();
        let before = copy.snapshot(&engine);

        source.set_intensity(&mut engine, 1.0);
        source.set_position(&mut engine, Vec3::ZERO);
        source.update_cone(&mut engine, ConeUpdate::both(0.01, 0.02));
        source.set_color(&mut engine, Color::BLACK);

        assert_eq!(copy.snapshot(&engine), before);
        assert_eq!(copy.intensity(&engine), 800.0);
    }

    #[test]
    fn destroy_keeps_the_entity() {
        let mut engine = HeadlessEngine::new();
        let entity = engine.entity_manager_mut().create();
        let light = LightBuilder::new(LightType::Point).attach(&mut engine, entity).unwrap();

        light.destroy(&mut engine);
        assert!(!light.is_alive(&engine));
        assert!(engine.light_manager().is_empty());
        assert!(engine.entity_manager().is_alive(entity));
    }

    #[test]
    fn destroy_with_entity_releases_both() {
        let mut engine = HeadlessEngine::new();
        let light = spot(&mut engine);
        let entity = light.entity();

        light.destroy_with_entity(&mut engine);
        assert!(!engine.light_manager().has_component(entity));
        assert!(!engine.entity_manager().is_alive(entity));
        assert!(engine.light_manager().is_empty());
        assert!(engine.entity_manager().is_empty());
    }

    #[test]
    fn rejected_build_releases_its_entity() {
        let mut engine = HeadlessEngine::new();
        engine.light_manager_mut().set_limit(Some(1));
        let first = spot(&mut engine);

        let err = LightBuilder::new(LightType::Sun).build(&mut engine).unwrap_err();
        assert!(matches!(err, LightError::Engine(_)));
        assert_eq!(engine.entity_manager().len(), 1);
        assert_eq!(first.duplicate(&mut engine), Err(err));
        assert_eq!(engine.entity_manager().len(), 1);

        first.destroy_with_entity(&mut engine);
        assert!(engine.entity_manager().is_empty());
    }

    #[test]
    fn attach_needs_a_live_entity_without_light() {
        let mut engine = HeadlessEngine::new();
        let builder = LightBuilder::new(LightType::Point);

        let entity = engine.entity_manager_mut().create();
        let light = builder.attach(&mut engine, entity).unwrap();
        assert_eq!(light.entity(), entity);
        assert_eq!(
            builder.attach(&mut engine, entity),
            Err(LightError::ComponentExists(entity))
        );

        // Dropping the light hands the entity back for reuse.
        light.destroy(&mut engine);
        assert!(engine.entity_manager().is_alive(entity));
        let again = builder.attach(&mut engine, entity).unwrap();

        again.destroy_with_entity(&mut engine);
        assert_eq!(
            builder.attach(&mut engine, entity),
            Err(LightError::DeadEntity(entity))
        );
    }

    #[test]
    fn builder_defaults_follow_engine_defaults() {
        let builder = LightBuilder::new(LightType::Directional);
        let desc = builder.desc();
        assert!(!desc.cast_shadows);
        assert_eq!(desc.direction, Vec3::NEG_Y);
        assert_eq!(desc.color, Color::WHITE);
        assert!(desc.inner_cone_angle <= desc.outer_cone_angle);
    }
}

//! In-memory light component storage
//!
//! Slot 0 is reserved for `LightInstance::INVALID`; live slots start at 1.
//! Released slots are recycled, so an instance resolved before a destroy may
//! name a different light afterwards.

use lux_core::math::{Color, Vec3};
use lux_core::{Entity, LightDesc, LightError, LightInstance, LightManager, LightType};
use lux_metrics::Counter;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct HeadlessLightManager {
    slots: Vec<Option<LightDesc>>,
    by_entity: HashMap<Entity, u32>,
    free: Vec<u32>,
    limit: Option<usize>,
    calls: Counter,
}

impl HeadlessLightManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live light components.
    pub fn len(&self) -> usize {
        self.by_entity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_entity.is_empty()
    }

    /// Cap the number of live lights. Creates past the cap are rejected with
    /// [`LightError::Engine`], as a native engine does when its light buffer
    /// is full. `None` removes the cap.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
    }

    /// Calls received, keyed as `light.<operation>`.
    pub fn calls(&self) -> &Counter {
        &self.calls
    }

    pub fn calls_mut(&mut self) -> &mut Counter {
        &mut self.calls
    }

    fn record(&self, instance: LightInstance) -> Option<&LightDesc> {
        let slot = instance.slot().checked_sub(1)? as usize;
        self.slots.get(slot)?.as_ref()
    }

    fn read<T: Default>(&self, instance: LightInstance, f: impl FnOnce(&LightDesc) -> T) -> T {
        match self.record(instance) {
            Some(desc) => f(desc),
            None => {
                tracing::warn!(slot = instance.slot(), "read from invalid light instance");
                T::default()
            }
        }
    }

    fn write(&mut self, instance: LightInstance, op: &str, f: impl FnOnce(&mut LightDesc)) {
        self.calls.increment(op, 1);
        let record = instance
            .slot()
            .checked_sub(1)
            .and_then(|slot| self.slots.get_mut(slot as usize))
            .and_then(Option::as_mut);
        match record {
            Some(desc) => f(desc),
            None => tracing::warn!(
                slot = instance.slot(),
                op,
                "write to invalid light instance ignored"
            ),
        }
    }
}

impl LightManager for HeadlessLightManager {
    fn instance(&self, entity: Entity) -> LightInstance {
        self.by_entity
            .get(&entity)
            .map_or(LightInstance::INVALID, |&slot| LightInstance::new(slot))
    }

    fn has_component(&self, entity: Entity) -> bool {
        self.by_entity.contains_key(&entity)
    }

    fn create(&mut self, entity: Entity, desc: &LightDesc) -> Result<(), LightError> {
        self.calls.increment("light.create", 1);
        if self.by_entity.contains_key(&entity) {
            return Err(LightError::ComponentExists(entity));
        }
        if let Some(limit) = self.limit.filter(|&limit| self.by_entity.len() >= limit) {
            return Err(LightError::Engine(format!("light limit of {limit} reached")));
        }

        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[(slot - 1) as usize] = Some(desc.clone());
                slot
            }
            None => {
                self.slots.push(Some(desc.clone()));
                self.slots.len() as u32
            }
        };
        self.by_entity.insert(entity, slot);
        tracing::trace!(%entity, slot, light_type = ?desc.light_type, "light component created");
        Ok(())
    }

    fn destroy(&mut self, entity: Entity) {
        self.calls.increment("light.destroy", 1);
        match self.by_entity.remove(&entity) {
            Some(slot) => {
                self.slots[(slot - 1) as usize] = None;
                self.free.push(slot);
            }
            None => tracing::warn!(%entity, "destroy on entity without light component"),
        }
    }

    fn light_type(&self, instance: LightInstance) -> LightType {
        match self.record(instance) {
            Some(desc) => desc.light_type,
            None => {
                tracing::warn!(slot = instance.slot(), "read from invalid light instance");
                LightType::Directional
            }
        }
    }

    fn position(&self, instance: LightInstance) -> Vec3 {
        self.read(instance, |d| d.position)
    }

    fn set_position(&mut self, instance: LightInstance, position: Vec3) {
        self.write(instance, "light.set_position", |d| d.position = position);
    }

    fn direction(&self, instance: LightInstance) -> Vec3 {
        self.read(instance, |d| d.direction)
    }

    fn set_direction(&mut self, instance: LightInstance, direction: Vec3) {
        self.write(instance, "light.set_direction", |d| d.direction = direction);
    }

    fn intensity(&self, instance: LightInstance) -> f32 {
        self.read(instance, |d| d.intensity)
    }

    fn set_intensity(&mut self, instance: LightInstance, intensity: f32) {
        self.write(instance, "light.set_intensity", |d| d.intensity = intensity);
    }

    fn color(&self, instance: LightInstance) -> Color {
        self.read(instance, |d| d.color)
    }

    fn set_color(&mut self, instance: LightInstance, color: Color) {
        self.write(instance, "light.set_color", |d| d.color = color);
    }

    fn is_shadow_caster(&self, instance: LightInstance) -> bool {
        self.read(instance, |d| d.cast_shadows)
    }

    fn set_shadow_caster(&mut self, instance: LightInstance, shadow_caster: bool) {
        self.write(instance, "light.set_shadow_caster", |d| d.cast_shadows = shadow_caster);
    }

    fn falloff(&self, instance: LightInstance) -> f32 {
        self.read(instance, |d| d.falloff)
    }

    fn set_falloff(&mut self, instance: LightInstance, falloff: f32) {
        self.write(instance, "light.set_falloff", |d| d.falloff = falloff);
    }

    fn sun_halo_falloff(&self, instance: LightInstance) -> f32 {
        self.read(instance, |d| d.sun_halo_falloff)
    }

    fn set_sun_halo_falloff(&mut self, instance: LightInstance, falloff: f32) {
        self.write(instance, "light.set_sun_halo_falloff", |d| d.sun_halo_falloff = falloff);
    }

    fn sun_halo_size(&self, instance: LightInstance) -> f32 {
        self.read(instance, |d| d.sun_halo_size)
    }

    fn set_sun_halo_size(&mut self, instance: LightInstance, size: f32) {
        self.write(instance, "light.set_sun_halo_size", |d| d.sun_halo_size = size);
    }

    fn sun_angular_radius(&self, instance: LightInstance) -> f32 {
        self.read(instance, |d| d.sun_angular_radius)
    }

    fn set_sun_angular_radius(&mut self, instance: LightInstance, degrees: f32) {
        self.write(instance, "light.set_sun_angular_radius", |d| d.sun_angular_radius = degrees);
    }

    fn inner_cone_angle(&self, instance: LightInstance) -> f32 {
        self.read(instance, |d| d.inner_cone_angle)
    }

    fn outer_cone_angle(&self, instance: LightInstance) -> f32 {
        self.read(instance, |d| d.outer_cone_angle)
    }

    fn set_spot_light_cone(&mut self, instance: LightInstance, inner: f32, outer: f32) {
        self.write(instance, "light.set_spot_light_cone", |d| {
            d.inner_cone_angle = inner;
            d.outer_cone_angle = outer;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_resolve_destroy() {
        let mut lights = HeadlessLightManager::new();
        let entity = Entity::new(3, 0);
        assert_eq!(lights.instance(entity), LightInstance::INVALID);

        lights.create(entity, &LightDesc::new(LightType::Point)).unwrap();
        let instance = lights.instance(entity);
        assert!(instance.is_valid());
        assert_eq!(lights.light_type(instance), LightType::Point);
        assert_eq!(lights.len(), 1);

        lights.destroy(entity);
        assert!(!lights.has_component(entity));
        assert_eq!(lights.instance(entity), LightInstance::INVALID);
        assert!(lights.is_empty());
    }

    #[test]
    fn second_component_is_rejected() {
        let mut lights = HeadlessLightManager::new();
        let entity = Entity::new(0, 0);
        let desc = LightDesc::new(LightType::Sun);
        lights.create(entity, &desc).unwrap();
        assert_eq!(
            lights.create(entity, &desc),
            Err(LightError::ComponentExists(entity))
        );
    }

    #[test]
    fn slots_are_recycled() {
        let mut lights = HeadlessLightManager::new();
        let a = Entity::new(0, 0);
        let b = Entity::new(1, 0);
        lights.create(a, &LightDesc::new(LightType::Point)).unwrap();
        let slot_a = lights.instance(a);
        lights.destroy(a);

        lights.create(b, &LightDesc::new(LightType::Spot)).unwrap();
        assert_eq!(lights.instance(b), slot_a);
        assert_eq!(lights.light_type(slot_a), LightType::Spot);
    }

    #[test]
    fn creates_past_the_limit_are_rejected() {
        let mut lights = HeadlessLightManager::new();
        lights.set_limit(Some(1));
        let desc = LightDesc::new(LightType::Point);
        lights.create(Entity::new(0, 0), &desc).unwrap();

        let err = lights.create(Entity::new(1, 0), &desc).unwrap_err();
        assert!(matches!(err, LightError::Engine(_)));
        assert!(!lights.has_component(Entity::new(1, 0)));

        lights.destroy(Entity::new(0, 0));
        lights.create(Entity::new(1, 0), &desc).unwrap();
        lights.set_limit(None);
        lights.create(Entity::new(2, 0), &desc).unwrap();
        assert_eq!(lights.len(), 2);
    }

    #[test]
    fn invalid_instance_reads_default_and_ignores_writes() {
        let mut lights = HeadlessLightManager::new();
        lights.set_intensity(LightInstance::INVALID, 5.0);
        assert_eq!(lights.intensity(LightInstance::INVALID), 0.0);
        #[cfg(feature = "metrics")]
        assert_eq!(lights.calls().get("light.set_intensity"), 1);
    }
}

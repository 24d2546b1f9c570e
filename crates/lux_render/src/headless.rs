//! Headless engine
//!
//! Owns an entity allocator, a light manager and the IBL/skybox tables.
//! Resource ids are never reused, so a destroyed indirect light or skybox
//! can't alias a newer one.

use crate::lights::HeadlessLightManager;
use lux_core::{
    Engine, EntityAllocator, IndirectLight, IndirectLightDesc, LightError, Skybox, SkyboxDesc,
};
use lux_metrics::Counter;
use std::collections::HashMap;

#[derive(Debug)]
pub struct HeadlessEngine {
    entities: EntityAllocator,
    lights: HeadlessLightManager,
    indirect_lights: HashMap<IndirectLight, IndirectLightDesc>,
    skyboxes: HashMap<Skybox, SkyboxDesc>,
    next_resource_id: u64,
    calls: Counter,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        tracing::debug!("headless engine created");
        Self {
            entities: EntityAllocator::new(),
            lights: HeadlessLightManager::new(),
            indirect_lights: HashMap::new(),
            skyboxes: HashMap::new(),
            next_resource_id: 1,
            calls: Counter::new(),
        }
    }

    pub fn indirect_light_desc(&self, indirect_light: IndirectLight) -> Option<&IndirectLightDesc> {
        self.indirect_lights.get(&indirect_light)
    }

    pub fn skybox_desc(&self, skybox: Skybox) -> Option<&SkyboxDesc> {
        self.skyboxes.get(&skybox)
    }

    pub fn indirect_light_count(&self) -> usize {
        self.indirect_lights.len()
    }

    pub fn skybox_count(&self) -> usize {
        self.skyboxes.len()
    }

    /// Calls received for IBL and skybox resources, keyed as `engine.<operation>`.
    pub fn calls(&self) -> &Counter {
        &self.calls
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_resource_id;
        self.next_resource_id += 1;
        id
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for HeadlessEngine {
    type Entities = EntityAllocator;
    type Lights = HeadlessLightManager;

    fn entity_manager(&self) -> &EntityAllocator {
        &self.entities
    }

    fn entity_manager_mut(&mut self) -> &mut EntityAllocator {
        &mut self.entities
    }

    fn light_manager(&self) -> &HeadlessLightManager {
        &self.lights
    }

    fn light_manager_mut(&mut self) -> &mut HeadlessLightManager {
        &mut self.lights
    }

    fn create_indirect_light(
        &mut self,
        desc: &IndirectLightDesc,
    ) -> Result<IndirectLight, LightError> {
        self.calls.increment("engine.create_indirect_light", 1);
        let indirect_light = IndirectLight::from_raw(self.next_id());
        self.indirect_lights.insert(indirect_light, desc.clone());
        Ok(indirect_light)
    }

    fn destroy_indirect_light(&mut self, indirect_light: IndirectLight) {
        self.calls.increment("engine.destroy_indirect_light", 1);
        if self.indirect_lights.remove(&indirect_light).is_none() {
            tracing::warn!(id = indirect_light.id(), "destroy on unknown indirect light");
        }
    }

    fn create_skybox(&mut self, desc: &SkyboxDesc) -> Result<Skybox, LightError> {
        self.calls.increment("engine.create_skybox", 1);
        let skybox = Skybox::from_raw(self.next_id());
        self.skyboxes.insert(skybox, desc.clone());
        Ok(skybox)
    }

    fn destroy_skybox(&mut self, skybox: Skybox) {
        self.calls.increment("engine.destroy_skybox", 1);
        if self.skyboxes.remove(&skybox).is_none() {
            tracing::warn!(id = skybox.id(), "destroy on unknown skybox");
        }
    }
}

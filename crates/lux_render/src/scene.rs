//! Headless scene container

use lux_core::{IndirectLight, Scene, Skybox};
use lux_metrics::Counter;

/// Scene with one indirect light slot and one skybox slot.
///
/// Every write is counted under `scene.set_indirect_light` /
/// `scene.set_skybox`, whether or not the value changed.
#[derive(Debug, Default)]
pub struct HeadlessScene {
    indirect_light: Option<IndirectLight>,
    skybox: Option<Skybox>,
    calls: Counter,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &Counter {
        &self.calls
    }

    pub fn calls_mut(&mut self) -> &mut Counter {
        &mut self.calls
    }
}

impl Scene for HeadlessScene {
    fn indirect_light(&self) -> Option<IndirectLight> {
        self.indirect_light
    }

    fn set_indirect_light(&mut self, indirect_light: Option<IndirectLight>) {
        self.calls.increment("scene.set_indirect_light", 1);
        self.indirect_light = indirect_light;
    }

    fn skybox(&self) -> Option<Skybox> {
        self.skybox
    }

    fn set_skybox(&mut self, skybox: Option<Skybox>) {
        self.calls.increment("scene.set_skybox", 1);
        self.skybox = skybox;
    }
}

//! Scene environment: indirect light + skybox
//!
//! Environments are usually captured as HDR equirectangular images and
//! pre-processed offline into the data an indirect light needs. A scene holds
//! one indirect light, used as a distant probe for global illumination, and
//! one skybox, which fills every pixel nothing else covered.

use crate::indirect::{destroy_indirect_light, destroy_skybox};
use lux_core::{Engine, IndirectLight, Scene, Skybox};

/// Pairing of an indirect light and a skybox, both owned by the engine.
///
/// Equality is handle identity. Two environments built from the same source
/// data are still different environments.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Environment {
    pub indirect_light: Option<IndirectLight>,
    pub skybox: Option<Skybox>,
}

impl Environment {
    pub fn new(indirect_light: Option<IndirectLight>, skybox: Option<Skybox>) -> Self {
        Self {
            indirect_light,
            skybox,
        }
    }

    /// Release both halves. Detach the environment from every scene first.
    pub fn destroy<E: Engine>(self, engine: &mut E) {
        if let Some(indirect_light) = self.indirect_light {
            destroy_indirect_light(engine, indirect_light);
        }
        if let Some(skybox) = self.skybox {
            destroy_skybox(engine, skybox);
        }
    }
}

/// Make the scene's indirect light and skybox match `environment`.
///
/// Each field is written only when it differs from what the scene already
/// holds; changing either one can make the engine recompute reflection
/// probes. `None` clears both.
pub fn apply_environment<S: Scene + ?Sized>(scene: &mut S, environment: Option<&Environment>) {
    let indirect_light = environment.and_then(|env| env.indirect_light);
    let skybox = environment.and_then(|env| env.skybox);

    if scene.indirect_light() != indirect_light {
        tracing::trace!(?indirect_light, "scene indirect light changed");
        scene.set_indirect_light(indirect_light);
    }
    if scene.skybox() != skybox {
        tracing::trace!(?skybox, "scene skybox changed");
        scene.set_skybox(skybox);
    }
}

/// `scene.set_environment(..)` sugar over [`apply_environment`].
pub trait SceneExt: Scene {
    fn set_environment(&mut self, environment: Option<&Environment>) {
        apply_environment(self, environment);
    }

    /// The environment currently applied, read back from the scene.
    fn environment(&self) -> Environment {
        Environment::new(self.indirect_light(), self.skybox())
    }
}

impl<S: Scene + ?Sized> SceneExt for S {}

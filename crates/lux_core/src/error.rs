use crate::entity::Entity;
use thiserror::Error;

/// Errors raised while creating lights, indirect lights or skyboxes.
///
/// Accessors on existing handles never fail; feeding them a dead handle is a
/// precondition violation left to the engine.
#[derive(Debug, Error, PartialEq)]
pub enum LightError {
    #[error("entity {0} already has a light component")]
    ComponentExists(Entity),

    #[error("entity {0} is not alive")]
    DeadEntity(Entity),

    #[error("irradiance needs 1, 4 or 9 spherical harmonics coefficients, got {coefficients}")]
    InvalidIrradiance { coefficients: usize },

    #[error("engine rejected the request: {0}")]
    Engine(String),
}

//! Lux Render Backends
//!
//! Engine implementations behind the `lux_core` capability traits.
//!
//! Only the headless backend ships today: an in-memory engine that stores
//! exactly what it is given and counts every call it receives. Tools use it
//! to run light setups without a GPU, tests use it to observe which writes
//! reached the engine.

pub mod headless;
pub mod lights;
pub mod scene;

pub use headless::HeadlessEngine;
pub use lights::HeadlessLightManager;
pub use scene::HeadlessScene;

pub use lux_metrics::Counter;

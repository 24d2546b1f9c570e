//! Lux Runtime
//!
//! Boots the headless engine, builds the configured lighting rig and applies
//! the environment to a scene. Useful for checking a settings file without a
//! GPU.
//!
//! Usage: `lux [settings.json]` (defaults to `lux.json` in the working directory)

use anyhow::{Context, Result};
use lux_core::math::Vec3;
use lux_light::{Environment, SceneExt};
use lux_render::{HeadlessEngine, HeadlessScene};
use lux_services::Settings;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Lux v{}", lux_core::VERSION);

    let path = std::env::args().nth(1).unwrap_or_else(|| "lux.json".to_string());
    let settings = Settings::load_or_default(&path)
        .with_context(|| format!("loading settings from {path}"))?;

    let mut engine = HeadlessEngine::new();
    let mut scene = HeadlessScene::new();

    let main_light = settings.lighting.main_light().build(&mut engine)?;
    let fill_light = main_light.duplicate(&mut engine)?;
    fill_light.set_direction(&mut engine, Vec3::new(0.5, -0.5, 0.5).normalize());
    let fill_intensity = main_light.intensity(&engine) * 0.25;
    fill_light.set_intensity(&mut engine, fill_intensity);
    fill_light.set_shadow_caster(&mut engine, false);

    let environment = Environment::new(
        Some(settings.environment.indirect_light().build(&mut engine)?),
        Some(settings.environment.skybox().build(&mut engine)?),
    );
    scene.set_environment(Some(&environment));
    // Second apply is a no-op on the engine side.
    scene.set_environment(Some(&environment));

    for (name, light) in [("main", main_light), ("fill", fill_light)] {
        tracing::info!(
            name,
            entity = %light.entity(),
            light_type = ?light.light_type(&engine),
            intensity = light.intensity(&engine),
            direction = ?light.direction(&engine),
            shadows = light.is_shadow_caster(&engine),
            "light ready"
        );
    }
    tracing::info!(
        indirect_light_writes = scene.calls().get("scene.set_indirect_light"),
        skybox_writes = scene.calls().get("scene.set_skybox"),
        "environment applied"
    );

    scene.set_environment(None);
    environment.destroy(&mut engine);
    fill_light.destroy_with_entity(&mut engine);
    main_light.destroy_with_entity(&mut engine);

    tracing::info!("Runtime shut down cleanly");
    Ok(())
}

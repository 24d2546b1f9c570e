//! Construction descriptors passed to the engine
//!
//! These are plain data. The fluent builders that callers use live in
//! `lux_light`; engines only ever see the finished descriptor.

use crate::handle::Texture;
use crate::math::{Color, Mat3, Vec3};
use std::f32::consts::FRAC_PI_4;

/// Kind of light, fixed when the light is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightType {
    /// Directional light that also draws a sun disk in the sky
    Sun,
    /// Directional light (parallel rays, no position)
    Directional,
    /// Point light radiating in all directions from a position
    Point,
    /// Spot light whose intensity stays constant when the cone changes
    FocusedSpot,
    /// Physically correct spot light
    Spot,
}

/// Every parameter a light can be built with.
#[derive(Debug, Clone, PartialEq)]
pub struct LightDesc {
    pub light_type: LightType,
    pub cast_shadows: bool,
    pub position: Vec3,
    pub direction: Vec3,
    /// Lux for directional lights, lumens otherwise
    pub intensity: f32,
    pub color: Color,
    /// Distance at which point/spot light influence reaches zero
    pub falloff: f32,
    pub sun_halo_falloff: f32,
    pub sun_halo_size: f32,
    /// Degrees
    pub sun_angular_radius: f32,
    /// Radians
    pub inner_cone_angle: f32,
    /// Radians
    pub outer_cone_angle: f32,
}

impl LightDesc {
    pub fn new(light_type: LightType) -> Self {
        Self {
            light_type,
            cast_shadows: false,
            position: Vec3::ZERO,
            direction: Vec3::NEG_Y,
            intensity: 100_000.0,
            color: Color::WHITE,
            falloff: 1.0,
            sun_halo_falloff: 80.0,
            sun_halo_size: 10.0,
            sun_angular_radius: 0.545,
            inner_cone_angle: FRAC_PI_4 * 0.75,
            outer_cone_angle: FRAC_PI_4,
        }
    }
}

/// Parameters for an image-based indirect light.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectLightDesc {
    pub intensity: f32,
    pub rotation: Mat3,
    /// Spherical harmonics coefficients for 1, 2 or 3 bands (1, 4 or 9 values)
    pub irradiance: Option<Vec<Vec3>>,
    pub reflections: Option<Texture>,
}

impl Default for IndirectLightDesc {
    fn default() -> Self {
        Self {
            intensity: 30_000.0,
            rotation: Mat3::IDENTITY,
            irradiance: None,
            reflections: None,
        }
    }
}

/// Parameters for a skybox.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyboxDesc {
    /// Solid color used when no environment cubemap is set
    pub color: Option<Color>,
    pub environment: Option<Texture>,
    pub intensity: f32,
    pub show_sun: bool,
}

impl Default for SkyboxDesc {
    fn default() -> Self {
        Self {
            color: None,
            environment: None,
            intensity: 30_000.0,
            show_sun: false,
        }
    }
}

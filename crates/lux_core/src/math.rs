//! Math types
//!
//! Re-exports glam and adds a linear RGB color

pub use glam::*;

use serde::{Deserialize, Serialize};

/// Linear RGB color
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Color> for Vec3 {
    fn from(c: Color) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_vec3_conversions() {
        let c = Color::new(0.25, 0.5, 1.0);
        let v: Vec3 = c.into();
        assert_eq!(v, Vec3::new(0.25, 0.5, 1.0));
        assert_eq!(Color::from(v), c);
        assert_eq!(Color::from([0.25, 0.5, 1.0]), c);
    }
}

//! Opaque engine-side handles
//!
//! None of these own anything. Equality is identity: two handles are equal
//! only when they name the same engine object, regardless of its contents.

/// Per-manager component slot for a light.
///
/// Engines may reassign slots at any time, so an instance is only meaningful
/// for the duration of the call that resolved it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LightInstance(u32);

impl LightInstance {
    /// Returned when an entity has no light component.
    pub const INVALID: Self = Self(0);

    pub const fn new(slot: u32) -> Self {
        Self(slot)
    }

    pub fn slot(&self) -> u32 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

/// Indirect light (image-based lighting probe) owned by the engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IndirectLight(u64);

impl IndirectLight {
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Skybox owned by the engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Skybox(u64);

impl Skybox {
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Cubemap texture referenced by indirect lights and skyboxes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Texture(u64);

impl Texture {
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

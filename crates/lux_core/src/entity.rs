//! Entity handle with generational index
//!
//! Entities are lightweight handles (8 bytes) that name an object inside the
//! engine's entity registry. The registry owns their lifetime; the adapter
//! only carries them around.

use crate::engine::EntityManager;

/// Entity handle (generation-indexed)
///
/// Format: [32-bit index | 32-bit generation]
/// - Index: Slot in the engine's entity table
/// - Generation: Incremented when the slot is released
///
/// A handle says nothing about liveness. Using it after the engine released
/// it is a caller error the adapter does not detect.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Serialize to 64-bit integer (for FFI and save files)
    pub fn to_bits(&self) -> u64 {
        ((self.generation as u64) << 32) | (self.index as u64)
    }

    /// Deserialize from 64-bit integer
    pub fn from_bits(bits: u64) -> Self {
        Self {
            index: bits as u32,
            generation: (bits >> 32) as u32,
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Free-list entity allocator.
///
/// Released slots are reused with a bumped generation, so a stale handle
/// never compares equal to the entity that took over its slot.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    generations: Vec<u32>,
    alive: Vec<bool>,
    free: Vec<u32>,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh entity, reusing a released slot when one exists.
    pub fn create(&mut self) -> Entity {
        if let Some(index) = self.free.pop() {
            self.alive[index as usize] = true;
            return Entity::new(index, self.generations[index as usize]);
        }
        let index = self.generations.len() as u32;
        self.generations.push(0);
        self.alive.push(true);
        Entity::new(index, 0)
    }

    /// Release an entity. Returns false if it was already dead.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        let index = entity.index as usize;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.alive[index] = false;
        self.free.push(entity.index);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        let index = entity.index as usize;
        self.alive.get(index).copied().unwrap_or(false)
            && self.generations[index] == entity.generation
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.generations.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EntityManager for EntityAllocator {
    fn create(&mut self) -> Entity {
        EntityAllocator::create(self)
    }

    fn destroy(&mut self, entity: Entity) {
        EntityAllocator::destroy(self, entity);
    }

    fn is_alive(&self, entity: Entity) -> bool {
        EntityAllocator::is_alive(self, entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_round_trip() {
        let entity = Entity::new(7, 3);
        assert_eq!(entity.to_bits(), (3u64 << 32) | 7);
        assert_eq!(Entity::from_bits(entity.to_bits()), entity);
    }

    #[test]
    fn released_slot_is_reused_with_new_generation() {
        let mut alloc = EntityAllocator::new();
        let a = alloc.create();
        let b = alloc.create();
        assert_ne!(a, b);
        assert_eq!(alloc.len(), 2);

        assert!(alloc.destroy(a));
        assert!(!alloc.is_alive(a));
        assert!(!alloc.destroy(a));

        let c = alloc.create();
        assert_eq!(c.index(), a.index());
        assert_eq!(c.generation(), a.generation() + 1);
        assert_ne!(c, a);
        assert!(alloc.is_alive(c));
        assert!(alloc.is_alive(b));
    }

    #[test]
    fn released_slot_is_dead_until_reused() {
        let mut alloc = EntityAllocator::new();
        let a = alloc.create();
        alloc.destroy(a);

        // Same index, current generation, but the slot is on the free list.
        let next = Entity::new(a.index(), a.generation() + 1);
        assert!(!alloc.is_alive(next));
        assert!(!alloc.destroy(next));
        assert_eq!(alloc.len(), 0);

        assert_eq!(alloc.create(), next);
        assert!(alloc.is_alive(next));
        assert_eq!(alloc.len(), 1);
    }

    #[test]
    fn unknown_entity_is_dead() {
        let alloc = EntityAllocator::new();
        assert!(!alloc.is_alive(Entity::new(42, 0)));
        assert!(alloc.is_empty());
    }
}

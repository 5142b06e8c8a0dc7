//! Entity identifiers.

use std::fmt;

/// Unique identifier for one entity tracked in the registry.
///
/// A generational pair into the registry's slot arena: `index` addresses the
/// slot, `generation` detects reuse. When an entity is removed its slot's
/// generation is bumped, so ids held past removal resolve to absent instead
/// of aliasing whatever entity reuses the slot.
///
/// Ids are only minted by [`crate::Registry::create_entity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId {
    index: u32,
    generation: u32,
}

impl EntityId {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index into the registry's arena.
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Generation of the slot at the time this id was minted.
    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

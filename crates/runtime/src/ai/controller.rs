//! Per-entity AI controller.

use behavior_tree::{BehaviorTree, Status};
use game_core::{EntityId, Registry};

use crate::ai::memory::{NpcMemory, SharedMemory};
use crate::ai::presets::{self, AiProfile};

/// Binds one behavior tree to one entity.
///
/// The controller owns the tree and the entity's [`NpcMemory`]; ticking it
/// evaluates the tree exactly once against the current registry state.
pub struct AiController {
    entity: EntityId,
    tree: BehaviorTree<EntityId, Registry>,
    memory: SharedMemory,
}

impl AiController {
    /// Controller running the stock NPC tree with default tuning.
    ///
    /// The entity's id seeds the tree's RNG, so a deterministic spawn order
    /// yields deterministic wandering.
    pub fn new(entity: EntityId) -> Self {
        Self::with_profile(entity, AiProfile::default())
    }

    /// Controller running the stock NPC tree with custom tuning.
    pub fn with_profile(entity: EntityId, profile: AiProfile) -> Self {
        let seed = (u64::from(entity.index()) << 32) | u64::from(entity.generation());
        let memory = NpcMemory::shared(seed);
        let tree = presets::npc(memory.clone(), profile);
        Self {
            entity,
            tree,
            memory,
        }
    }

    /// Controller around a caller-built tree and its memory.
    pub fn from_parts(
        entity: EntityId,
        tree: BehaviorTree<EntityId, Registry>,
        memory: SharedMemory,
    ) -> Self {
        Self {
            entity,
            tree,
            memory,
        }
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn memory(&self) -> &SharedMemory {
        &self.memory
    }

    /// Evaluates the tree exactly once for this frame.
    pub fn update(&mut self, registry: &mut Registry, dt: f32) -> Status {
        let status = self.tree.execute(self.entity, registry, dt);
        tracing::trace!(entity = %self.entity, ?status, "ai tick");
        status
    }
}

//! Condition leaves: read-only checks against the registry.

use behavior_tree::builder::condition;
use game_core::{EntityId, Registry};

use crate::ai::memory::SharedMemory;
use crate::ai::nodes::{NpcNode, player_position};

/// Succeeds while the entity's health fraction is below `threshold`.
///
/// Fails for entities without health, and for dead ones: a dead entity
/// should not start fleeing.
pub fn is_low_health(threshold: f32) -> NpcNode {
    condition(move |entity: EntityId, registry: &Registry, _dt| {
        registry
            .health(entity)
            .is_some_and(|health| !health.is_dead && health.health_percentage() < threshold)
    })
}

/// Succeeds while the player is within `range` of the entity.
pub fn sees_player(range: f32) -> NpcNode {
    condition(move |entity: EntityId, registry: &Registry, _dt| {
        let Some(player) = player_position(registry) else {
            return false;
        };
        registry
            .movement(entity)
            .is_some_and(|movement| movement.position.distance(player) <= range)
    })
}

/// Succeeds once the entity has idled for at least `idle_limit` seconds.
pub fn idle_timed_out(memory: SharedMemory, idle_limit: f32) -> NpcNode {
    condition(move |_entity, _registry: &Registry, _dt| {
        memory.borrow().idle_timer >= idle_limit
    })
}

//! Leaf nodes for NPC behavior trees.
//!
//! Conditions read the registry; actions steer the entity's movement
//! component. All leaves are built through the `behavior_tree::builder`
//! helpers so composites can box them uniformly.

pub mod actions;
pub mod conditions;

use behavior_tree::Behavior;
use game_core::{EntityId, Registry, Vec2};

/// Boxed node over the registry world, as stored in NPC trees.
pub type NpcNode = Box<dyn Behavior<EntityId, Registry>>;

/// Position of the player entity, if one is tagged and has movement.
///
/// With several entities tagged "player" an arbitrary one wins; the game
/// only ever tags one.
pub(crate) fn player_position(registry: &Registry) -> Option<Vec2> {
    let player = registry.entities_with_tag("player").next()?;
    registry.movement(player).map(|m| m.position)
}

//! Preset behavior trees for stock NPC archetypes.

use behavior_tree::BehaviorTree;
use behavior_tree::builder::{selector, sequence};
use game_core::{EntityId, Registry};

use crate::ai::memory::SharedMemory;
use crate::ai::nodes::{actions, conditions};

/// Tuning knobs for the stock NPC tree.
#[derive(Clone, Copy, Debug)]
pub struct AiProfile {
    /// Health fraction below which the entity flees.
    pub flee_threshold: f32,
    /// Distance at which the entity notices the player.
    pub sight_range: f32,
    /// Seconds of idling before a wander leg starts.
    pub idle_limit: f32,
    /// Seconds each wander leg lasts.
    pub wander_duration: f32,
}

impl Default for AiProfile {
    fn default() -> Self {
        Self {
            flee_threshold: 0.3,
            sight_range: 200.0,
            idle_limit: 2.0,
            wander_duration: 1.5,
        }
    }
}

/// The stock NPC tree: flee when hurt, chase when the player is near,
/// wander after idling too long, otherwise idle.
///
/// A selector over guarded sequences, tried in priority order every tick.
/// The idle branch is unguarded so the tree as a whole always succeeds or
/// reports a wander in progress.
pub fn npc(memory: SharedMemory, profile: AiProfile) -> BehaviorTree<EntityId, Registry> {
    BehaviorTree::new(selector(vec![
        sequence(vec![
            conditions::is_low_health(profile.flee_threshold),
            actions::flee(),
        ]),
        sequence(vec![
            conditions::sees_player(profile.sight_range),
            actions::chase(),
        ]),
        sequence(vec![
            conditions::idle_timed_out(memory.clone(), profile.idle_limit),
            actions::wander(memory.clone(), profile.wander_duration),
        ]),
        sequence(vec![actions::idle(memory)]),
    ]))
}

/// A tree for harmless NPCs: wander after idling, otherwise idle.
pub fn passive(memory: SharedMemory, profile: AiProfile) -> BehaviorTree<EntityId, Registry> {
    BehaviorTree::new(selector(vec![
        sequence(vec![
            conditions::idle_timed_out(memory.clone(), profile.idle_limit),
            actions::wander(memory.clone(), profile.wander_duration),
        ]),
        sequence(vec![actions::idle(memory)]),
    ]))
}

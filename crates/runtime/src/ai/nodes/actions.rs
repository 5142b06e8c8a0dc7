//! Action leaves: steer the entity through its movement component.

use std::f32::consts::TAU;

use behavior_tree::Status;
use behavior_tree::builder::{action, action_from_bool};
use game_core::{EntityId, Registry, Vec2};
use rand::Rng;

use crate::ai::memory::SharedMemory;
use crate::ai::nodes::{NpcNode, player_position};

/// Runs directly away from the player at full speed.
///
/// Succeeds every tick so the surrounding sequence re-evaluates the flee
/// condition next frame; fails when the entity cannot move or there is no
/// player to flee from.
pub fn flee() -> NpcNode {
    action(|entity: EntityId, registry: &mut Registry, _dt| {
        let Some(player) = player_position(registry) else {
            return Status::Failure;
        };
        match registry.movement_mut(entity) {
            Some(movement) => {
                let away = movement.position - player;
                movement.set_direction(away);
                Status::Success
            }
            None => Status::Failure,
        }
    })
}

/// Runs straight at the player at full speed.
pub fn chase() -> NpcNode {
    action(|entity: EntityId, registry: &mut Registry, _dt| {
        let Some(player) = player_position(registry) else {
            return Status::Failure;
        };
        match registry.movement_mut(entity) {
            Some(movement) => {
                let toward = player - movement.position;
                movement.set_direction(toward);
                Status::Success
            }
            None => Status::Failure,
        }
    })
}

/// Walks in a random direction for `duration` seconds.
///
/// The first tick picks a heading and returns `Running`; later ticks burn
/// down the remaining time and keep returning `Running`, which holds the
/// tree's cursor on this node until the leg completes with `Success`.
pub fn wander(memory: SharedMemory, duration: f32) -> NpcNode {
    action(move |entity: EntityId, registry: &mut Registry, dt| {
        let mut memory = memory.borrow_mut();

        if memory.wander_remaining <= 0.0 {
            let Some(movement) = registry.movement_mut(entity) else {
                return Status::Failure;
            };
            let angle: f32 = memory.rng.gen_range(0.0..TAU);
            movement.set_direction(Vec2::new(angle.cos(), angle.sin()));
            memory.idle_timer = 0.0;
            memory.wander_remaining = duration;
            return Status::Running;
        }

        memory.wander_remaining -= dt;
        if memory.wander_remaining > 0.0 {
            return Status::Running;
        }
        memory.wander_remaining = 0.0;
        if let Some(movement) = registry.movement_mut(entity) {
            movement.stop();
        }
        Status::Success
    })
}

/// Stands still, accruing idle time. Always succeeds.
pub fn idle(memory: SharedMemory) -> NpcNode {
    action_from_bool(move |entity: EntityId, registry: &mut Registry, dt| {
        if let Some(movement) = registry.movement_mut(entity) {
            movement.stop();
        }
        memory.borrow_mut().idle_timer += dt;
        true
    })
}

//! Drives all AI controllers once per frame.

use std::collections::HashMap;

use game_core::{EntityId, Registry};
use thiserror::Error;

use crate::ai::AiController;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("entity {0} is not alive")]
    EntityNotAlive(EntityId),
    #[error("entity {0} already has a controller")]
    AlreadyControlled(EntityId),
}

/// Owns one [`AiController`] per AI-driven entity and ticks them all.
///
/// Controllers for entities that die mid-frame are pruned at the end of
/// the update, so a controller never ticks against a stale id more than
/// the frame its entity died in.
#[derive(Default)]
pub struct AiScheduler {
    controllers: HashMap<EntityId, AiController>,
}

impl AiScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a controller for its entity.
    pub fn register(
        &mut self,
        registry: &Registry,
        controller: AiController,
    ) -> Result<(), SchedulerError> {
        let entity = controller.entity();
        if !registry.is_alive(entity) {
            return Err(SchedulerError::EntityNotAlive(entity));
        }
        if self.controllers.contains_key(&entity) {
            return Err(SchedulerError::AlreadyControlled(entity));
        }
        self.controllers.insert(entity, controller);
        Ok(())
    }

    /// Drops the controller for an entity, if any.
    pub fn unregister(&mut self, entity: EntityId) -> Option<AiController> {
        self.controllers.remove(&entity)
    }

    pub fn is_controlled(&self, entity: EntityId) -> bool {
        self.controllers.contains_key(&entity)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Ticks every controller once, then prunes controllers whose entities
    /// are no longer alive.
    ///
    /// Controllers are ticked over a snapshot of the registered ids, so
    /// trees may spawn and remove entities while the update runs.
    pub fn update(&mut self, registry: &mut Registry, dt: f32) {
        let entities: Vec<EntityId> = self.controllers.keys().copied().collect();
        for entity in entities {
            if !registry.is_alive(entity) {
                continue;
            }
            if let Some(controller) = self.controllers.get_mut(&entity) {
                controller.update(registry, dt);
            }
        }

        self.controllers.retain(|entity, _| {
            let alive = registry.is_alive(*entity);
            if !alive {
                tracing::debug!(entity = %entity, "pruning controller for dead entity");
            }
            alive
        });
    }
}

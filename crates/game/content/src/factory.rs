//! Instantiates templates into the registry.

use game_core::{
    CombatComponent, Component, EntityId, HealthComponent, InventoryComponent, MovementComponent,
    Registry, Vec2,
};

use crate::templates::EntityTemplate;

/// Spawns one entity from a template at the given position.
///
/// Every spawned entity gets a movement component; health, combat, and
/// inventory follow the template. Tags are applied after creation.
pub fn spawn(registry: &mut Registry, template: &EntityTemplate, position: Vec2) -> EntityId {
    let mut components: Vec<Component> =
        vec![MovementComponent::new(position, template.speed).into()];

    if let Some(max_health) = template.health {
        components.push(HealthComponent::new(max_health).into());
    }
    if let Some(combat) = &template.combat {
        components.push(CombatComponent::new(combat.damage, combat.range, combat.cooldown).into());
    }
    if let Some(capacity) = template.inventory {
        components.push(InventoryComponent::new(capacity).into());
    }

    let entity = registry.create_entity(components);
    for tag in &template.tags {
        registry.add_tag(entity, tag);
    }
    entity
}

//! The entity-component registry.

use std::collections::{HashMap, HashSet};

use strum::{EnumCount, IntoEnumIterator};

use crate::component::{
    CombatComponent, Component, ComponentKind, HealthComponent, InventoryComponent,
    MovementComponent,
};
use crate::entity::EntityId;

/// Storage slot for one entity in the arena.
struct Slot {
    generation: u32,
    alive: bool,
    components: [Option<Component>; ComponentKind::COUNT],
}

impl Slot {
    fn new(generation: u32) -> Self {
        Self {
            generation,
            alive: true,
            components: std::array::from_fn(|_| None),
        }
    }
}

/// Owner of all entities, their components, and the tag index.
///
/// Entities live in a generational slot arena: removing an entity bumps its
/// slot's generation and recycles the slot, so ids held past removal simply
/// stop resolving instead of aliasing the slot's next occupant. Every
/// accessor treats a stale or dead id as "component absent" and every
/// mutator treats it as a no-op, which makes removal idempotent and lets
/// AI code run against snapshots without checking liveness first.
///
/// Components are indexed two ways: per entity (the slot's kind-indexed
/// array) and per kind (an insertion-ordered id list per [`ComponentKind`]),
/// so both "what does this entity have" and "who has movement" are cheap.
#[derive(Default)]
pub struct Registry {
    slots: Vec<Slot>,
    free: Vec<u32>,
    by_kind: [Vec<EntityId>; ComponentKind::COUNT],
    tags: HashMap<String, HashSet<EntityId>>,
    live: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an entity carrying the given components and returns its id.
    ///
    /// Later components of the same kind overwrite earlier ones, matching
    /// [`Registry::add_component`] replacement semantics.
    pub fn create_entity<T>(&mut self, components: T) -> EntityId
    where
        T: IntoIterator<Item = Component>,
    {
        let index = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.alive = true;
                index
            }
            None => {
                self.slots.push(Slot::new(0));
                (self.slots.len() - 1) as u32
            }
        };
        let id = EntityId::new(index, self.slots[index as usize].generation);
        self.live += 1;

        for component in components {
            self.add_component(id, component);
        }
        id
    }

    /// Destroys an entity: detaches all its components, clears it out of
    /// every tag set, and retires its id. Calling this again with the same
    /// id, or with an id that was never alive, does nothing.
    pub fn remove_entity(&mut self, entity: EntityId) {
        if !self.is_alive(entity) {
            return;
        }

        for kind in ComponentKind::iter() {
            let slot = &mut self.slots[entity.index() as usize];
            if slot.components[kind.index()].take().is_some() {
                self.by_kind[kind.index()].retain(|id| *id != entity);
            }
        }
        for set in self.tags.values_mut() {
            set.remove(&entity);
        }

        let slot = &mut self.slots[entity.index() as usize];
        slot.alive = false;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(entity.index());
        self.live -= 1;
    }

    /// Whether the id still names a living entity.
    pub fn is_alive(&self, entity: EntityId) -> bool {
        self.slots
            .get(entity.index() as usize)
            .is_some_and(|slot| slot.alive && slot.generation == entity.generation())
    }

    /// Number of living entities.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Snapshot of every living entity id.
    ///
    /// A snapshot rather than an iterator so callers can create and remove
    /// entities while walking it; removed entities simply stop resolving.
    pub fn live_entities(&self) -> Vec<EntityId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.alive)
            .map(|(index, slot)| EntityId::new(index as u32, slot.generation))
            .collect()
    }

    // ------------------------------------------------------------------
    // Components
    // ------------------------------------------------------------------

    /// Attaches a component, replacing any existing component of the same
    /// kind. No effect if the entity is dead or the id is stale.
    pub fn add_component(&mut self, entity: EntityId, component: Component) {
        if !self.is_alive(entity) {
            return;
        }
        let kind = component.kind();
        let previous =
            self.slots[entity.index() as usize].components[kind.index()].replace(component);
        if previous.is_none() {
            self.by_kind[kind.index()].push(entity);
        }
    }

    /// Detaches and returns the entity's component of the given kind.
    pub fn remove_component(&mut self, entity: EntityId, kind: ComponentKind) -> Option<Component> {
        if !self.is_alive(entity) {
            return None;
        }
        let removed = self.slots[entity.index() as usize].components[kind.index()].take();
        if removed.is_some() {
            self.by_kind[kind.index()].retain(|id| *id != entity);
        }
        removed
    }

    /// The entity's component of the given kind, if present.
    pub fn component(&self, entity: EntityId, kind: ComponentKind) -> Option<&Component> {
        if !self.is_alive(entity) {
            return None;
        }
        self.slots[entity.index() as usize].components[kind.index()].as_ref()
    }

    pub fn component_mut(
        &mut self,
        entity: EntityId,
        kind: ComponentKind,
    ) -> Option<&mut Component> {
        if !self.is_alive(entity) {
            return None;
        }
        self.slots[entity.index() as usize].components[kind.index()].as_mut()
    }

    pub fn has_component(&self, entity: EntityId, kind: ComponentKind) -> bool {
        self.component(entity, kind).is_some()
    }

    /// Entities carrying a component of the given kind, in attachment order.
    pub fn entities_with_component(&self, kind: ComponentKind) -> &[EntityId] {
        &self.by_kind[kind.index()]
    }

    // Typed accessors for the concrete component kinds.

    pub fn health(&self, entity: EntityId) -> Option<&HealthComponent> {
        self.component(entity, ComponentKind::Health)?.as_health()
    }

    pub fn health_mut(&mut self, entity: EntityId) -> Option<&mut HealthComponent> {
        self.component_mut(entity, ComponentKind::Health)?
            .as_health_mut()
    }

    pub fn movement(&self, entity: EntityId) -> Option<&MovementComponent> {
        self.component(entity, ComponentKind::Movement)?
            .as_movement()
    }

    pub fn movement_mut(&mut self, entity: EntityId) -> Option<&mut MovementComponent> {
        self.component_mut(entity, ComponentKind::Movement)?
            .as_movement_mut()
    }

    pub fn combat(&self, entity: EntityId) -> Option<&CombatComponent> {
        self.component(entity, ComponentKind::Combat)?.as_combat()
    }

    pub fn combat_mut(&mut self, entity: EntityId) -> Option<&mut CombatComponent> {
        self.component_mut(entity, ComponentKind::Combat)?
            .as_combat_mut()
    }

    pub fn inventory(&self, entity: EntityId) -> Option<&InventoryComponent> {
        self.component(entity, ComponentKind::Inventory)?
            .as_inventory()
    }

    pub fn inventory_mut(&mut self, entity: EntityId) -> Option<&mut InventoryComponent> {
        self.component_mut(entity, ComponentKind::Inventory)?
            .as_inventory_mut()
    }

    // ------------------------------------------------------------------
    // Tags
    // ------------------------------------------------------------------

    /// Adds the entity to a tag group. Idempotent; no effect if the entity
    /// is dead or the id is stale.
    pub fn add_tag(&mut self, entity: EntityId, tag: &str) {
        if !self.is_alive(entity) {
            return;
        }
        self.tags.entry(tag.to_owned()).or_default().insert(entity);
    }

    /// Removes the entity from a tag group.
    pub fn remove_tag(&mut self, entity: EntityId, tag: &str) {
        if let Some(set) = self.tags.get_mut(tag) {
            set.remove(&entity);
        }
    }

    pub fn has_tag(&self, entity: EntityId, tag: &str) -> bool {
        self.tags
            .get(tag)
            .is_some_and(|set| set.contains(&entity))
    }

    /// Entities in a tag group, in no particular order. Empty for a tag
    /// never added.
    pub fn entities_with_tag<'a>(&'a self, tag: &str) -> impl Iterator<Item = EntityId> + 'a {
        self.tags.get(tag).into_iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec2;

    fn health(max: u32) -> Component {
        HealthComponent::new(max).into()
    }

    fn movement(speed: f32) -> Component {
        MovementComponent::new(Vec2::ZERO, speed).into()
    }

    #[test]
    fn create_entity_attaches_initial_components() {
        let mut registry = Registry::new();
        let entity = registry.create_entity([health(100), movement(5.0)]);

        assert!(registry.is_alive(entity));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.health(entity).map(|h| h.max_health), Some(100));
        assert!(registry.movement(entity).is_some());
        assert!(registry.combat(entity).is_none());
    }

    #[test]
    fn add_component_replaces_same_kind() {
        let mut registry = Registry::new();
        let entity = registry.create_entity([health(100)]);

        registry.add_component(entity, health(40));
        assert_eq!(registry.health(entity).map(|h| h.max_health), Some(40));
        assert_eq!(
            registry.entities_with_component(ComponentKind::Health),
            &[entity],
            "replacement must not duplicate the per-kind index entry"
        );
    }

    #[test]
    fn per_kind_index_keeps_attachment_order() {
        let mut registry = Registry::new();
        let first = registry.create_entity([movement(1.0)]);
        let second = registry.create_entity([movement(2.0)]);
        let third = registry.create_entity([]);
        registry.add_component(third, movement(3.0));

        assert_eq!(
            registry.entities_with_component(ComponentKind::Movement),
            &[first, second, third]
        );

        registry.remove_component(second, ComponentKind::Movement);
        assert_eq!(
            registry.entities_with_component(ComponentKind::Movement),
            &[first, third]
        );
    }

    #[test]
    fn remove_entity_clears_components_and_tags() {
        let mut registry = Registry::new();
        let entity = registry.create_entity([health(50), movement(2.0)]);
        registry.add_tag(entity, "enemy");

        registry.remove_entity(entity);

        assert!(!registry.is_alive(entity));
        assert!(registry.health(entity).is_none());
        assert!(!registry.has_tag(entity, "enemy"));
        assert!(registry
            .entities_with_component(ComponentKind::Health)
            .is_empty());
        assert_eq!(registry.entities_with_tag("enemy").count(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn remove_entity_is_idempotent() {
        let mut registry = Registry::new();
        let entity = registry.create_entity([health(50)]);

        registry.remove_entity(entity);
        registry.remove_entity(entity);

        assert_eq!(registry.len(), 0);
        let replacement = registry.create_entity([]);
        assert!(registry.is_alive(replacement));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn stale_id_does_not_alias_slot_reuse() {
        let mut registry = Registry::new();
        let old = registry.create_entity([health(50)]);
        registry.remove_entity(old);

        let new = registry.create_entity([health(75)]);
        assert_eq!(new.index(), old.index(), "slot should be recycled");
        assert_ne!(new, old);

        assert!(!registry.is_alive(old));
        assert!(registry.health(old).is_none());
        assert_eq!(registry.health(new).map(|h| h.max_health), Some(75));

        registry.add_component(old, movement(1.0));
        assert!(
            registry.movement(new).is_none(),
            "mutation through a stale id must not touch the new occupant"
        );
    }

    #[test]
    fn mutators_ignore_dead_entities() {
        let mut registry = Registry::new();
        let entity = registry.create_entity([]);
        registry.remove_entity(entity);

        registry.add_component(entity, health(10));
        registry.add_tag(entity, "enemy");

        assert!(registry.health(entity).is_none());
        assert!(!registry.has_tag(entity, "enemy"));
        assert!(registry
            .entities_with_component(ComponentKind::Health)
            .is_empty());
    }

    #[test]
    fn tags_group_entities() {
        let mut registry = Registry::new();
        let a = registry.create_entity([]);
        let b = registry.create_entity([]);
        let c = registry.create_entity([]);
        registry.add_tag(a, "enemy");
        registry.add_tag(b, "enemy");
        registry.add_tag(b, "enemy");
        registry.add_tag(c, "npc");

        let mut enemies: Vec<_> = registry.entities_with_tag("enemy").collect();
        enemies.sort();
        let mut expected = vec![a, b];
        expected.sort();
        assert_eq!(enemies, expected);

        assert!(registry.has_tag(c, "npc"));
        assert!(!registry.has_tag(c, "enemy"));
        assert_eq!(registry.entities_with_tag("boss").count(), 0);
    }

    #[test]
    fn remove_tag_only_affects_one_group() {
        let mut registry = Registry::new();
        let entity = registry.create_entity([]);
        registry.add_tag(entity, "enemy");
        registry.add_tag(entity, "ranged");

        registry.remove_tag(entity, "enemy");
        assert!(!registry.has_tag(entity, "enemy"));
        assert!(registry.has_tag(entity, "ranged"));
    }

    #[test]
    fn live_entities_snapshot_survives_mutation() {
        let mut registry = Registry::new();
        let a = registry.create_entity([]);
        let b = registry.create_entity([]);

        let snapshot = registry.live_entities();
        assert_eq!(snapshot.len(), 2);

        for entity in snapshot {
            registry.remove_entity(entity);
        }
        assert!(registry.is_empty());
        assert!(!registry.is_alive(a));
        assert!(!registry.is_alive(b));
    }

    #[test]
    fn typed_mutation_round_trips() {
        let mut registry = Registry::new();
        let entity = registry.create_entity([health(100)]);

        if let Some(h) = registry.health_mut(entity) {
            h.take_damage(30);
        }
        assert_eq!(
            registry.health(entity).map(|h| h.current_health),
            Some(70)
        );
    }
}

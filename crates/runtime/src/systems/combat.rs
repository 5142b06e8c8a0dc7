//! Combat resolution system.

use game_core::{ComponentKind, EntityId, Registry, Vec2};

/// Advances every combat cooldown by `dt` seconds.
pub fn tick_cooldowns(registry: &mut Registry, dt: f32) {
    let entities: Vec<_> = registry
        .entities_with_component(ComponentKind::Combat)
        .to_vec();
    for entity in entities {
        if let Some(combat) = registry.combat_mut(entity) {
            combat.tick_cooldown(dt);
        }
    }
}

/// Attempts an attack from `attacker` toward `target_point`.
///
/// The attack lands on the nearest other entity with health whose position
/// is within the attacker's range of `target_point`. Returns whether a hit
/// landed; the cooldown starts whenever the swing happens, hit or miss.
pub fn perform_attack(registry: &mut Registry, attacker: EntityId, target_point: Vec2) -> bool {
    let Some(combat) = registry.combat(attacker) else {
        return false;
    };
    if !combat.can_attack() {
        return false;
    }
    let damage = combat.base_damage;
    let range = combat.attack_range;

    if let Some(combat) = registry.combat_mut(attacker) {
        combat.begin_cooldown();
    }

    let Some(target) = find_target_in_range(registry, attacker, target_point, range) else {
        tracing::debug!(attacker = %attacker, "attack missed");
        return false;
    };

    if let Some(health) = registry.health_mut(target) {
        health.take_damage(damage);
        tracing::debug!(attacker = %attacker, target = %target, damage, "attack landed");
        return true;
    }
    false
}

/// Nearest entity with health within `range` of `point`, excluding
/// `attacker`. Dead entities are still valid positions but take no damage.
fn find_target_in_range(
    registry: &Registry,
    attacker: EntityId,
    point: Vec2,
    range: f32,
) -> Option<EntityId> {
    registry
        .entities_with_component(ComponentKind::Health)
        .iter()
        .copied()
        .filter(|entity| *entity != attacker)
        .filter_map(|entity| {
            let position = registry.movement(entity)?.position;
            let distance = position.distance(point);
            (distance <= range).then_some((entity, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, _)| entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CombatComponent, Component, HealthComponent, MovementComponent};

    fn spawn_fighter(registry: &mut Registry, position: Vec2) -> EntityId {
        registry.create_entity([
            Component::Health(HealthComponent::new(50)),
            Component::Movement(MovementComponent::new(position, 2.0)),
            Component::Combat(CombatComponent::new(10, 30.0, 1.0)),
        ])
    }

    #[test]
    fn attack_hits_nearest_target_in_range() {
        let mut registry = Registry::new();
        let attacker = spawn_fighter(&mut registry, Vec2::ZERO);
        let near = spawn_fighter(&mut registry, Vec2::new(10.0, 0.0));
        let far = spawn_fighter(&mut registry, Vec2::new(25.0, 0.0));

        assert!(perform_attack(&mut registry, attacker, Vec2::new(12.0, 0.0)));
        assert_eq!(registry.health(near).unwrap().current_health, 40);
        assert_eq!(registry.health(far).unwrap().current_health, 50);
    }

    #[test]
    fn attack_misses_outside_range() {
        let mut registry = Registry::new();
        let attacker = spawn_fighter(&mut registry, Vec2::ZERO);
        let victim = spawn_fighter(&mut registry, Vec2::new(100.0, 0.0));

        assert!(!perform_attack(
            &mut registry,
            attacker,
            Vec2::new(0.0, 0.0)
        ));
        assert_eq!(registry.health(victim).unwrap().current_health, 50);
    }

    #[test]
    fn cooldown_blocks_consecutive_attacks() {
        let mut registry = Registry::new();
        let attacker = spawn_fighter(&mut registry, Vec2::ZERO);
        let victim = spawn_fighter(&mut registry, Vec2::new(5.0, 0.0));

        assert!(perform_attack(&mut registry, attacker, Vec2::new(5.0, 0.0)));
        assert!(!perform_attack(
            &mut registry,
            attacker,
            Vec2::new(5.0, 0.0)
        ));

        tick_cooldowns(&mut registry, 1.0);
        assert!(perform_attack(&mut registry, attacker, Vec2::new(5.0, 0.0)));
        assert_eq!(registry.health(victim).unwrap().current_health, 30);
    }

    #[test]
    fn attacker_never_hits_itself() {
        let mut registry = Registry::new();
        let attacker = spawn_fighter(&mut registry, Vec2::ZERO);

        assert!(!perform_attack(&mut registry, attacker, Vec2::ZERO));
        assert_eq!(registry.health(attacker).unwrap().current_health, 50);
    }
}

//! Movement integration system.

use game_core::{ComponentKind, Registry};

/// Advances every movement component by one step of `dt` seconds.
///
/// Iterates over a snapshot of the movement index so callers may add or
/// remove entities from inside the same frame.
pub fn integrate(registry: &mut Registry, dt: f32) {
    let entities: Vec<_> = registry
        .entities_with_component(ComponentKind::Movement)
        .to_vec();
    for entity in entities {
        if let Some(movement) = registry.movement_mut(entity) {
            movement.integrate(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Component, MovementComponent, Vec2};

    #[test]
    fn integrate_moves_every_mover() {
        let mut registry = Registry::new();
        let a = registry.create_entity([Component::Movement(MovementComponent::new(
            Vec2::ZERO,
            10.0,
        ))]);
        let b = registry.create_entity([Component::Movement(MovementComponent::new(
            Vec2::new(5.0, 0.0),
            10.0,
        ))]);
        registry
            .movement_mut(a)
            .unwrap()
            .set_direction(Vec2::new(1.0, 0.0));
        registry
            .movement_mut(b)
            .unwrap()
            .set_direction(Vec2::new(0.0, 1.0));

        integrate(&mut registry, 1.0);

        assert!(registry.movement(a).unwrap().position.x > 0.0);
        assert!(registry.movement(b).unwrap().position.y > 0.0);
    }

    #[test]
    fn integrate_skips_entities_removed_mid_frame() {
        let mut registry = Registry::new();
        let mover = registry.create_entity([Component::Movement(MovementComponent::new(
            Vec2::ZERO,
            10.0,
        ))]);
        registry.remove_entity(mover);

        integrate(&mut registry, 1.0);
        assert!(registry.movement(mover).is_none());
    }
}

//! Hit points and death state.

/// Hit points with a dead/alive flag derived from reaching zero.
///
/// Damage saturates at zero and healing is clamped to `max_health`. Once an
/// entity is dead it stays dead: further damage and healing are ignored
/// until [`HealthComponent::respawn`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthComponent {
    pub max_health: u32,
    pub current_health: u32,
    pub is_dead: bool,
}

impl HealthComponent {
    /// Full health, alive.
    pub const fn new(max_health: u32) -> Self {
        Self {
            max_health,
            current_health: max_health,
            is_dead: false,
        }
    }

    /// Applies damage, flipping to dead when health reaches zero.
    /// No effect on a dead entity.
    pub fn take_damage(&mut self, amount: u32) {
        if self.is_dead {
            return;
        }
        self.current_health = self.current_health.saturating_sub(amount);
        if self.current_health == 0 {
            self.is_dead = true;
        }
    }

    /// Restores health up to `max_health`. No effect on a dead entity.
    pub fn heal(&mut self, amount: u32) {
        if self.is_dead {
            return;
        }
        self.current_health = (self.current_health + amount).min(self.max_health);
    }

    /// Fraction of health remaining, in `0.0..=1.0`.
    pub fn health_percentage(&self) -> f32 {
        if self.max_health == 0 {
            0.0
        } else {
            self.current_health as f32 / self.max_health as f32
        }
    }

    /// Back to full health and alive.
    pub fn respawn(&mut self) {
        self.current_health = self.max_health;
        self.is_dead = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_heal_death_respawn_cycle() {
        let mut health = HealthComponent::new(100);

        health.take_damage(30);
        assert_eq!(health.current_health, 70);
        assert!(!health.is_dead);

        health.take_damage(80);
        assert_eq!(health.current_health, 0);
        assert!(health.is_dead);

        health.heal(50);
        assert_eq!(health.current_health, 0, "healing the dead has no effect");
        assert!(health.is_dead);

        health.respawn();
        assert_eq!(health.current_health, 100);
        assert!(!health.is_dead);
    }

    #[test]
    fn heal_clamps_to_max() {
        let mut health = HealthComponent::new(100);
        health.take_damage(10);
        health.heal(500);
        assert_eq!(health.current_health, 100);
    }

    #[test]
    fn dead_entities_take_no_further_damage() {
        let mut health = HealthComponent::new(10);
        health.take_damage(10);
        health.take_damage(10);
        assert_eq!(health.current_health, 0);
        assert!(health.is_dead);
    }

    #[test]
    fn percentage_reflects_remaining_health() {
        let mut health = HealthComponent::new(100);
        health.take_damage(70);
        assert!((health.health_percentage() - 0.3).abs() < 1e-6);
    }
}

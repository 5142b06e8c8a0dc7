//! Attack stats and cooldown tracking.

/// Attack damage, reach, and a dt-driven cooldown between attacks.
///
/// The cooldown counts down through [`CombatComponent::tick_cooldown`] with
/// the frame delta rather than reading a wall clock, so combat stays
/// deterministic under a fixed-step simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatComponent {
    pub base_damage: u32,
    pub attack_range: f32,
    pub attack_cooldown: f32,
    cooldown_remaining: f32,
}

impl CombatComponent {
    pub const fn new(base_damage: u32, attack_range: f32, attack_cooldown: f32) -> Self {
        Self {
            base_damage,
            attack_range,
            attack_cooldown,
            cooldown_remaining: 0.0,
        }
    }

    /// Whether the cooldown has elapsed.
    pub fn can_attack(&self) -> bool {
        self.cooldown_remaining <= 0.0
    }

    /// Restarts the cooldown after an attack.
    pub fn begin_cooldown(&mut self) {
        self.cooldown_remaining = self.attack_cooldown;
    }

    /// Advances the cooldown by `dt` seconds.
    pub fn tick_cooldown(&mut self, dt: f32) {
        if self.cooldown_remaining > 0.0 {
            self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);
        }
    }

    pub fn remaining_cooldown(&self) -> f32 {
        self.cooldown_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_combat_can_attack() {
        assert!(CombatComponent::new(5, 30.0, 1.0).can_attack());
    }

    #[test]
    fn cooldown_gates_attacks_until_ticked_down() {
        let mut combat = CombatComponent::new(5, 30.0, 1.0);
        combat.begin_cooldown();
        assert!(!combat.can_attack());

        combat.tick_cooldown(0.4);
        assert!(!combat.can_attack());

        combat.tick_cooldown(0.7);
        assert!(combat.can_attack());
        assert_eq!(combat.remaining_cooldown(), 0.0);
    }
}

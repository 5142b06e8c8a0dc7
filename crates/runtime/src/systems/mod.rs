//! Per-tick simulation systems over the registry.

pub mod combat;
pub mod movement;

pub use combat::{perform_attack, tick_cooldowns};
pub use movement::integrate;

//! Simulation runtime: AI controllers and per-tick systems.
//!
//! The runtime drives entities stored in a [`game_core::Registry`]. AI
//! lives in [`ai`]: one behavior tree per controlled entity, ticked once
//! per frame. Frame-level bookkeeping (movement integration, combat
//! cooldowns) lives in [`systems`].

pub mod ai;
pub mod scheduler;
pub mod systems;

pub use ai::{AiController, AiProfile, NpcMemory, SharedMemory};
pub use scheduler::{AiScheduler, SchedulerError};

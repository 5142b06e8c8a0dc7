//! Behavior-tree AI for NPC entities.
//!
//! Each controlled entity owns an [`AiController`] wrapping one behavior
//! tree. Tree leaves are closures over the registry; per-entity state that
//! outlives a single tick (timers, wander headings) lives in a shared
//! [`NpcMemory`] that the leaves capture.

pub mod controller;
pub mod memory;
pub mod nodes;
pub mod presets;

pub use controller::AiController;
pub use memory::{NpcMemory, SharedMemory};
pub use presets::AiProfile;

//! Entity-component registry and the component types stored in it.
//!
//! `game-core` owns the canonical world state: entities, their components
//! (indexed both per-entity and per-type), and the tag index that groups
//! them. All entity data lives in the [`Registry`]; systems and AI
//! controllers receive it by reference and never hold entity data of their
//! own.

pub mod component;
pub mod entity;
pub mod registry;
pub mod types;

pub use component::{
    CombatComponent, Component, ComponentKind, HealthComponent, InventoryComponent,
    MovementComponent,
};
pub use entity::EntityId;
pub use registry::Registry;
pub use types::Vec2;

//! Component types and the closed component enumeration.
//!
//! Every component an entity can carry is one variant of [`Component`], and
//! [`ComponentKind`] names the variants without their payloads. The registry
//! stores at most one component of each kind per entity and indexes entities
//! per kind, so the enumeration being closed is what lets it use flat arrays
//! instead of type-erased maps.

mod combat;
mod health;
mod inventory;
mod movement;

pub use combat::CombatComponent;
pub use health::HealthComponent;
pub use inventory::InventoryComponent;
pub use movement::MovementComponent;

use strum::{Display, EnumCount, EnumIter};

/// Discriminant of a [`Component`], used as an index key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum ComponentKind {
    Health,
    Movement,
    Combat,
    Inventory,
}

impl ComponentKind {
    /// Dense index of this kind, for per-kind array storage.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One attachable piece of entity state.
#[derive(Clone, Debug, PartialEq)]
pub enum Component {
    Health(HealthComponent),
    Movement(MovementComponent),
    Combat(CombatComponent),
    Inventory(InventoryComponent),
}

impl Component {
    /// The kind this component is stored under.
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Component::Health(_) => ComponentKind::Health,
            Component::Movement(_) => ComponentKind::Movement,
            Component::Combat(_) => ComponentKind::Combat,
            Component::Inventory(_) => ComponentKind::Inventory,
        }
    }

    pub const fn as_health(&self) -> Option<&HealthComponent> {
        match self {
            Component::Health(health) => Some(health),
            _ => None,
        }
    }

    pub const fn as_health_mut(&mut self) -> Option<&mut HealthComponent> {
        match self {
            Component::Health(health) => Some(health),
            _ => None,
        }
    }

    pub const fn as_movement(&self) -> Option<&MovementComponent> {
        match self {
            Component::Movement(movement) => Some(movement),
            _ => None,
        }
    }

    pub const fn as_movement_mut(&mut self) -> Option<&mut MovementComponent> {
        match self {
            Component::Movement(movement) => Some(movement),
            _ => None,
        }
    }

    pub const fn as_combat(&self) -> Option<&CombatComponent> {
        match self {
            Component::Combat(combat) => Some(combat),
            _ => None,
        }
    }

    pub const fn as_combat_mut(&mut self) -> Option<&mut CombatComponent> {
        match self {
            Component::Combat(combat) => Some(combat),
            _ => None,
        }
    }

    pub fn as_inventory(&self) -> Option<&InventoryComponent> {
        match self {
            Component::Inventory(inventory) => Some(inventory),
            _ => None,
        }
    }

    pub fn as_inventory_mut(&mut self) -> Option<&mut InventoryComponent> {
        match self {
            Component::Inventory(inventory) => Some(inventory),
            _ => None,
        }
    }
}

impl From<HealthComponent> for Component {
    fn from(value: HealthComponent) -> Self {
        Component::Health(value)
    }
}

impl From<MovementComponent> for Component {
    fn from(value: MovementComponent) -> Self {
        Component::Movement(value)
    }
}

impl From<CombatComponent> for Component {
    fn from(value: CombatComponent) -> Self {
        Component::Combat(value)
    }
}

impl From<InventoryComponent> for Component {
    fn from(value: InventoryComponent) -> Self {
        Component::Inventory(value)
    }
}

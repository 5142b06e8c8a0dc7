//! Item storage, equipment slots, and gold.

use std::collections::HashMap;

/// Stacked item storage with a total-count capacity, named equipment slots,
/// and a gold balance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventoryComponent {
    pub capacity: u32,
    items: HashMap<String, u32>,
    equipped: HashMap<String, String>,
    pub gold: u32,
}

impl InventoryComponent {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Adds `count` of an item, refusing the whole stack if it would exceed
    /// capacity. Returns whether the items were added.
    pub fn add_item(&mut self, name: &str, count: u32) -> bool {
        if self.total_items() + count > self.capacity {
            return false;
        }
        *self.items.entry(name.to_owned()).or_insert(0) += count;
        true
    }

    /// Removes `count` of an item. Returns false without changing anything
    /// if the stack is too small.
    pub fn remove_item(&mut self, name: &str, count: u32) -> bool {
        match self.items.get_mut(name) {
            Some(have) if *have >= count => {
                *have -= count;
                if *have == 0 {
                    self.items.remove(name);
                }
                true
            }
            _ => false,
        }
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn item_count(&self, name: &str) -> u32 {
        self.items.get(name).copied().unwrap_or(0)
    }

    /// Total number of items across all stacks.
    pub fn total_items(&self) -> u32 {
        self.items.values().sum()
    }

    /// Equips an item from the inventory into a named slot. The item must be
    /// in the inventory; a previously equipped item stays in the inventory.
    pub fn equip(&mut self, slot: &str, name: &str) -> bool {
        if !self.has_item(name) {
            return false;
        }
        self.equipped.insert(slot.to_owned(), name.to_owned());
        true
    }

    pub fn unequip(&mut self, slot: &str) -> Option<String> {
        self.equipped.remove(slot)
    }

    pub fn equipped_in(&self, slot: &str) -> Option<&str> {
        self.equipped.get(slot).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_refuses_overflowing_stack() {
        let mut inventory = InventoryComponent::new(5);
        assert!(inventory.add_item("potion", 3));
        assert!(!inventory.add_item("potion", 3), "3 + 3 exceeds capacity 5");
        assert_eq!(inventory.item_count("potion"), 3);
    }

    #[test]
    fn remove_drains_and_clears_stack() {
        let mut inventory = InventoryComponent::new(10);
        inventory.add_item("arrow", 4);
        assert!(inventory.remove_item("arrow", 4));
        assert!(!inventory.has_item("arrow"));
        assert!(!inventory.remove_item("arrow", 1));
    }

    #[test]
    fn equip_requires_owning_the_item() {
        let mut inventory = InventoryComponent::new(10);
        assert!(!inventory.equip("weapon", "sword"));

        inventory.add_item("sword", 1);
        assert!(inventory.equip("weapon", "sword"));
        assert_eq!(inventory.equipped_in("weapon"), Some("sword"));
        assert_eq!(inventory.unequip("weapon"), Some("sword".to_owned()));
        assert_eq!(inventory.equipped_in("weapon"), None);
    }
}

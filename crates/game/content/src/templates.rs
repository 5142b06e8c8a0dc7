//! Entity template definitions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Attack stats for a template's combat component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatSpec {
    pub damage: u32,
    pub range: f32,
    pub cooldown: f32,
}

/// Blueprint for one spawnable entity archetype.
///
/// Movement is always present (every spawned entity has a position); the
/// other components are attached only when their field is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityTemplate {
    pub name: String,
    #[serde(default)]
    pub health: Option<u32>,
    pub speed: f32,
    #[serde(default)]
    pub combat: Option<CombatSpec>,
    /// Inventory capacity, when the entity carries items.
    #[serde(default)]
    pub inventory: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Named collection of templates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateCatalog {
    templates: HashMap<String, EntityTemplate>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock archetypes shipped with the game.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(EntityTemplate {
            name: "player".into(),
            health: Some(100),
            speed: 5.0,
            combat: Some(CombatSpec {
                damage: 10,
                range: 50.0,
                cooldown: 0.5,
            }),
            inventory: Some(20),
            tags: vec!["player".into()],
        });
        catalog.insert(EntityTemplate {
            name: "enemy_basic".into(),
            health: Some(50),
            speed: 2.0,
            combat: Some(CombatSpec {
                damage: 5,
                range: 30.0,
                cooldown: 1.0,
            }),
            inventory: None,
            tags: vec!["enemy".into()],
        });
        catalog.insert(EntityTemplate {
            name: "enemy_strong".into(),
            health: Some(100),
            speed: 1.5,
            combat: Some(CombatSpec {
                damage: 10,
                range: 30.0,
                cooldown: 1.5,
            }),
            inventory: None,
            tags: vec!["enemy".into()],
        });
        catalog.insert(EntityTemplate {
            name: "enemy_fast".into(),
            health: Some(30),
            speed: 3.5,
            combat: Some(CombatSpec {
                damage: 3,
                range: 25.0,
                cooldown: 0.7,
            }),
            inventory: None,
            tags: vec!["enemy".into()],
        });
        catalog.insert(EntityTemplate {
            name: "npc_merchant".into(),
            health: None,
            speed: 1.0,
            combat: None,
            inventory: Some(50),
            tags: vec!["npc".into(), "merchant".into()],
        });
        catalog
    }

    /// Inserts a template under its own name, replacing any previous one.
    pub fn insert(&mut self, template: EntityTemplate) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn get(&self, name: &str) -> Option<&EntityTemplate> {
        self.templates.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

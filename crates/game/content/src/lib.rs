//! Entity templates and spawning.
//!
//! Templates describe what components and tags an entity starts with;
//! the factory instantiates them into a [`game_core::Registry`]. Catalogs
//! come either from the built-in set or from RON files on disk.

pub mod factory;
pub mod loaders;
pub mod templates;

pub use factory::spawn;
pub use templates::{CombatSpec, EntityTemplate, TemplateCatalog};

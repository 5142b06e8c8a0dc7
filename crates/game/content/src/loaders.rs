//! Content loaders for reading templates from files.

use std::path::Path;

use crate::templates::TemplateCatalog;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Loader for entity template catalogs from RON files.
pub struct TemplateLoader;

impl TemplateLoader {
    /// Load a template catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<TemplateCatalog> {
        let content = read_file(path)?;
        Self::from_ron_str(&content)
    }

    /// Parse a template catalog from RON text.
    pub fn from_ron_str(content: &str) -> LoadResult<TemplateCatalog> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse template RON: {}", e))
    }
}

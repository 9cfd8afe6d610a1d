//! Static in-memory category catalog.

use muse_core::config::CatalogConfig;
use muse_core::traits::ICategoryCatalog;
use muse_core::Category;

/// Catalog backed by an ordered in-memory list.
///
/// Iteration order is insertion order, so selection and tests see a
/// deterministic category sequence.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<(Category, Vec<String>)>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (category, keywords) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Category, Vec<String>)>) -> Self {
        let mut catalog = Self::new();
        for (category, keywords) in pairs {
            catalog.insert(category, keywords);
        }
        catalog
    }

    /// Build from the `[catalog]` config section.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::from_pairs(
            config
                .categories
                .iter()
                .map(|entry| (Category::new(entry.name.clone()), entry.keywords.clone())),
        )
    }

    /// Add a category with its keywords. Replaces the keywords if the
    /// category is already present, keeping its original position.
    pub fn insert(&mut self, category: Category, keywords: Vec<String>) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => *existing = keywords,
            None => self.entries.push((category, keywords)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl ICategoryCatalog for StaticCatalog {
    fn categories(&self) -> Vec<Category> {
        self.entries.iter().map(|(c, _)| c.clone()).collect()
    }

    fn keywords(&self, category: &Category) -> Vec<String> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, keywords)| keywords.clone())
            .unwrap_or_default()
    }
}

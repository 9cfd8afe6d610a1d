use serde::{Deserialize, Serialize};

/// One catalog entry: a category and its topic keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Static catalog contents. Order is preserved so selection iterates
/// categories deterministically. Empty by default; deployments supply
/// their own entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub categories: Vec<CatalogEntry>,
}

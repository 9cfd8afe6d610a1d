//! Muse configuration: per-subsystem sections, TOML-loadable, all defaulted.

pub mod defaults;

mod catalog_config;
mod learning_config;
mod selection_config;
mod storage_config;

pub use catalog_config::{CatalogConfig, CatalogEntry};
pub use learning_config::LearningConfig;
pub use selection_config::SelectionConfig;
pub use storage_config::StorageConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{MuseResult, ValidationError};

/// Top-level configuration. Every section defaults independently, so a
/// partial (or empty) TOML file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MuseConfig {
    pub selection: SelectionConfig,
    pub learning: LearningConfig,
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
}

impl MuseConfig {
    /// Parse from a TOML string. Missing sections and fields fall back to
    /// defaults; learning parameters are validated after parsing.
    pub fn from_toml(input: &str) -> MuseResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ValidationError::Malformed {
            reason: e.to_string(),
        })?;
        config.learning.validate()?;
        Ok(config)
    }
}

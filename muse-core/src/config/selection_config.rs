use serde::{Deserialize, Serialize};

use super::defaults;

/// Selection subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Weight assumed for categories never seen before.
    pub neutral_weight: f64,
    /// Template for composed topic titles. `{keyword}` and `{category}`
    /// are substituted.
    pub title_template: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            neutral_weight: defaults::DEFAULT_NEUTRAL_WEIGHT,
            title_template: defaults::DEFAULT_TITLE_TEMPLATE.to_string(),
        }
    }
}

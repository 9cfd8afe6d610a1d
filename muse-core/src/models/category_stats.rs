use serde::{Deserialize, Serialize};

use crate::weights::{Category, Weight};

/// One row of the diagnostics report: a category's current weight and how
/// many outcomes have been recorded for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: Category,
    pub weight: Weight,
    pub observations: u64,
}

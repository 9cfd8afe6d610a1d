use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::weights::Category;

/// One recorded engagement observation, as appended to the history log.
///
/// The metric is an opaque caller-supplied scalar; how views, comments or
/// anything else are combined into it is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementSample {
    pub category: Category,
    pub metric: f64,
    pub recorded_at: DateTime<Utc>,
}

impl EngagementSample {
    /// Sample stamped with the current time.
    pub fn new(category: Category, metric: f64) -> Self {
        Self {
            category,
            metric,
            recorded_at: Utc::now(),
        }
    }
}

use crate::errors::MuseResult;
use crate::models::EngagementSample;
use crate::weights::{Category, WeightTable};

/// Durable weight storage. Deployments that do not need durability supply
/// a no-op implementation.
pub trait IWeightStore: Send + Sync {
    /// Load the persisted table at startup. Empty when nothing was saved.
    fn load_weights(&self) -> MuseResult<WeightTable>;

    /// Persist a full snapshot of the table.
    fn save_weights(&self, table: &WeightTable) -> MuseResult<()>;

    /// Append one engagement observation to the history log.
    fn append_engagement(&self, sample: &EngagementSample) -> MuseResult<()>;

    /// Recent engagement history, newest first, optionally filtered by
    /// category. `None` limit means the store's configured default.
    fn engagement_history(
        &self,
        category: Option<&Category>,
        limit: Option<usize>,
    ) -> MuseResult<Vec<EngagementSample>>;
}

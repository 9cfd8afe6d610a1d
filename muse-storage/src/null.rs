//! No-op store for deployments that do not need durability.

use muse_core::errors::MuseResult;
use muse_core::models::EngagementSample;
use muse_core::traits::IWeightStore;
use muse_core::{Category, WeightTable};

/// Discards every write; loads nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullWeightStore;

impl IWeightStore for NullWeightStore {
    fn load_weights(&self) -> MuseResult<WeightTable> {
        Ok(WeightTable::new())
    }

    fn save_weights(&self, _table: &WeightTable) -> MuseResult<()> {
        Ok(())
    }

    fn append_engagement(&self, _sample: &EngagementSample) -> MuseResult<()> {
        Ok(())
    }

    fn engagement_history(
        &self,
        _category: Option<&Category>,
        _limit: Option<usize>,
    ) -> MuseResult<Vec<EngagementSample>> {
        Ok(Vec::new())
    }
}

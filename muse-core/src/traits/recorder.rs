use crate::errors::MuseResult;
use crate::weights::Category;

/// Feedback ingestion seam: callers report observed engagement for a
/// previously selected category whenever they have one. Muse never polls.
pub trait IOutcomeRecorder: Send + Sync {
    /// Record one engagement outcome for a category.
    fn record_outcome(&self, category: &Category, metric: f64) -> MuseResult<()>;
}

use crate::errors::MuseResult;
use crate::models::Topic;
use crate::weights::Category;

/// Weighted category selection seam.
pub trait ISelector: Send + Sync {
    /// Pick the next category, with probability proportional to weight.
    fn select_category(&self) -> MuseResult<Category>;

    /// Pick a category, then compose a full topic from its keywords.
    fn next_topic(&self) -> MuseResult<Topic>;
}

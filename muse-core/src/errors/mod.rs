//! Error taxonomy for the Muse workspace.
//!
//! Per-domain enums aggregated into [`MuseError`]; every fallible operation
//! in the workspace returns [`MuseResult`].

mod learning_error;
mod selection_error;
mod storage_error;
mod validation_error;

pub use learning_error::LearningError;
pub use selection_error::SelectionError;
pub use storage_error::StorageError;
pub use validation_error::ValidationError;

/// Workspace-wide result alias.
pub type MuseResult<T> = Result<T, MuseError>;

/// Top-level error: every failure a Muse operation can surface.
#[derive(Debug, thiserror::Error)]
pub enum MuseError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Learning(#[from] LearningError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("lock poisoned in {context}")]
    LockPoisoned { context: String },
}

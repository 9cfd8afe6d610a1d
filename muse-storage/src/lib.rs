//! # muse-storage
//!
//! SQLite persistence for the weight table and engagement history.

pub mod engine;
pub mod migrations;
pub mod null;
pub mod pragmas;
pub mod queries;

pub use engine::SqliteWeightStore;
pub use null::NullWeightStore;

use muse_core::errors::{MuseError, StorageError};

/// Wrap a SQLite failure message in the storage error type.
pub(crate) fn to_storage_err(message: String) -> MuseError {
    StorageError::SqliteError { message }.into()
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Storage subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    pub db_path: String,
    /// Enable WAL journal mode.
    pub wal_mode: bool,
    /// SQLite busy timeout in milliseconds.
    pub busy_timeout_ms: u64,
    /// Engagement-history rows returned when the caller gives no limit.
    pub history_limit: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: defaults::DEFAULT_DB_PATH.to_string(),
            wal_mode: true,
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
            history_limit: defaults::DEFAULT_HISTORY_LIMIT,
        }
    }
}

//! SqliteWeightStore — owns the connection, implements IWeightStore.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::debug;

use muse_core::config::StorageConfig;
use muse_core::errors::{MuseError, MuseResult};
use muse_core::models::EngagementSample;
use muse_core::traits::IWeightStore;
use muse_core::{Category, WeightTable};

use crate::{migrations, pragmas, queries, to_storage_err};

/// SQLite-backed weight store.
///
/// A single connection guarded by a mutex: the component is an infrequent
/// decision point, not a high-throughput service, so no pool is needed.
pub struct SqliteWeightStore {
    conn: Mutex<Connection>,
    history_limit: usize,
}

impl SqliteWeightStore {
    /// Open a store backed by a file on disk, with default settings.
    pub fn open(path: &Path) -> MuseResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed store with explicit storage configuration.
    /// The path argument wins over `config.db_path`.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> MuseResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn, config.wal_mode, config)
    }

    /// Open an in-memory store (for testing). WAL does not apply to
    /// in-memory databases, so journal pragmas are skipped.
    pub fn open_in_memory() -> MuseResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn, false, &StorageConfig::default())
    }

    fn initialize(conn: Connection, wal_mode: bool, config: &StorageConfig) -> MuseResult<Self> {
        pragmas::apply_pragmas(&conn, wal_mode, config.busy_timeout_ms)?;
        migrations::run_migrations(&conn)?;
        debug!("weight store initialized");
        Ok(Self {
            conn: Mutex::new(conn),
            history_limit: config.history_limit,
        })
    }

    fn with_conn<F, T>(&self, f: F) -> MuseResult<T>
    where
        F: FnOnce(&Connection) -> MuseResult<T>,
    {
        let conn = self.conn.lock().map_err(|_| MuseError::LockPoisoned {
            context: "sqlite connection".to_string(),
        })?;
        f(&conn)
    }

    /// Check that WAL journaling is active (file-backed stores only).
    pub fn wal_active(&self) -> MuseResult<bool> {
        self.with_conn(pragmas::verify_wal_mode)
    }
}

impl IWeightStore for SqliteWeightStore {
    fn load_weights(&self) -> MuseResult<WeightTable> {
        self.with_conn(queries::weight_ops::load_table)
    }

    fn save_weights(&self, table: &WeightTable) -> MuseResult<()> {
        self.with_conn(|conn| queries::weight_ops::save_table(conn, table))
    }

    fn append_engagement(&self, sample: &EngagementSample) -> MuseResult<()> {
        self.with_conn(|conn| queries::engagement_ops::append_sample(conn, sample))
    }

    fn engagement_history(
        &self,
        category: Option<&Category>,
        limit: Option<usize>,
    ) -> MuseResult<Vec<EngagementSample>> {
        let limit = limit.unwrap_or(self.history_limit);
        self.with_conn(|conn| queries::engagement_ops::recent_samples(conn, category, limit))
    }
}

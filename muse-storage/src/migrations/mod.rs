//! Versioned schema migrations, tracked in `schema_migrations`.

mod v001_weight_tables;
mod v002_engagement_log;

use rusqlite::{params, Connection};

use muse_core::errors::{MuseError, MuseResult, StorageError};

use crate::to_storage_err;

const MIGRATIONS: &[(u32, fn(&Connection) -> MuseResult<()>)] = &[
    (1, v001_weight_tables::migrate),
    (2, v002_engagement_log::migrate),
];

/// Run every migration not yet applied, in version order.
/// Safe to call on every open: applied versions are skipped.
pub fn run_migrations(conn: &Connection) -> MuseResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    for (version, migrate) in MIGRATIONS {
        let applied: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM schema_migrations WHERE version = ?1)",
                params![version],
                |row| row.get(0),
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
        if applied {
            continue;
        }

        migrate(conn).map_err(|e| {
            MuseError::from(StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })
        })?;

        conn.execute(
            "INSERT INTO schema_migrations (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}

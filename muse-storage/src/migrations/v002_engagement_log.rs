//! v002: engagement_log.

use rusqlite::Connection;

use muse_core::errors::MuseResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MuseResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS engagement_log (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            category    TEXT NOT NULL,
            metric      REAL NOT NULL,
            recorded_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_engagement_category ON engagement_log(category);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

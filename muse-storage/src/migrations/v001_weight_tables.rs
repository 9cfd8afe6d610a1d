//! v001: category_weights.

use rusqlite::Connection;

use muse_core::errors::MuseResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MuseResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS category_weights (
            category     TEXT PRIMARY KEY,
            weight       REAL NOT NULL DEFAULT 1.0,
            observations INTEGER NOT NULL DEFAULT 0,
            updated_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

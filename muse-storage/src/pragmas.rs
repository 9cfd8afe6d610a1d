//! PRAGMA configuration applied to the store's connection.
//!
//! WAL mode, NORMAL sync, busy_timeout, foreign_keys ON.

use rusqlite::Connection;

use muse_core::errors::MuseResult;

use crate::to_storage_err;

/// Apply safety and performance pragmas.
pub fn apply_pragmas(conn: &Connection, wal_mode: bool, busy_timeout_ms: u64) -> MuseResult<()> {
    if wal_mode {
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    conn.execute_batch(&format!(
        "
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA foreign_keys = ON;
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
/// In-memory databases report `memory` regardless of the pragma.
pub fn verify_wal_mode(conn: &Connection) -> MuseResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}

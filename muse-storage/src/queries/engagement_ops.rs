//! Append and query the engagement history log.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use muse_core::constants::MAX_HISTORY_LIMIT;
use muse_core::errors::MuseResult;
use muse_core::models::EngagementSample;
use muse_core::Category;

use crate::to_storage_err;

/// Append one observation to the log.
pub fn append_sample(conn: &Connection, sample: &EngagementSample) -> MuseResult<()> {
    conn.execute(
        "INSERT INTO engagement_log (category, metric, recorded_at) VALUES (?1, ?2, ?3)",
        params![
            sample.category.as_str(),
            sample.metric,
            sample.recorded_at.to_rfc3339()
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Recent samples, newest first, optionally filtered by category.
pub fn recent_samples(
    conn: &Connection,
    category: Option<&Category>,
    limit: usize,
) -> MuseResult<Vec<EngagementSample>> {
    let limit = limit.min(MAX_HISTORY_LIMIT) as i64;

    let mut raw: Vec<(String, f64, String)> = Vec::new();
    match category {
        Some(category) => {
            let mut stmt = conn
                .prepare(
                    "SELECT category, metric, recorded_at FROM engagement_log
                     WHERE category = ?1 ORDER BY id DESC LIMIT ?2",
                )
                .map_err(|e| to_storage_err(e.to_string()))?;
            let rows = stmt
                .query_map(params![category.as_str(), limit], |row| {
                    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
                })
                .map_err(|e| to_storage_err(e.to_string()))?;
            for row in rows {
                raw.push(row.map_err(|e| to_storage_err(e.to_string()))?);
            }
        }
        None => {
            let mut stmt = conn
                .prepare(
                    "SELECT category, metric, recorded_at FROM engagement_log
                     ORDER BY id DESC LIMIT ?1",
                )
                .map_err(|e| to_storage_err(e.to_string()))?;
            let rows = stmt
                .query_map(params![limit], |row| {
                    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
                })
                .map_err(|e| to_storage_err(e.to_string()))?;
            for row in rows {
                raw.push(row.map_err(|e| to_storage_err(e.to_string()))?);
            }
        }
    }

    raw.into_iter().map(to_sample).collect()
}

fn to_sample((category, metric, recorded_at): (String, f64, String)) -> MuseResult<EngagementSample> {
    let recorded_at = DateTime::parse_from_rfc3339(&recorded_at)
        .map_err(|e| to_storage_err(format!("bad recorded_at: {e}")))?
        .with_timezone(&Utc);
    Ok(EngagementSample {
        category: Category::new(category),
        metric,
        recorded_at,
    })
}

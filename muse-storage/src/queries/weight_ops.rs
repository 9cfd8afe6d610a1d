//! Load and save the category weight table.

use rusqlite::{params, Connection};

use muse_core::errors::MuseResult;
use muse_core::weights::{Category, CategoryState, Weight, WeightTable};

use crate::to_storage_err;

/// Read the full persisted table.
pub fn load_table(conn: &Connection) -> MuseResult<WeightTable> {
    let mut stmt = conn
        .prepare("SELECT category, weight, observations FROM category_weights")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut table = WeightTable::new();
    for row in rows {
        let (category, weight, observations) = row.map_err(|e| to_storage_err(e.to_string()))?;
        table.set(
            Category::new(category),
            CategoryState {
                weight: Weight::new(weight),
                observations: observations.max(0) as u64,
            },
        );
    }
    Ok(table)
}

/// Upsert every table entry. Wrapped in one transaction so a partially
/// written snapshot is never visible.
pub fn save_table(conn: &Connection, table: &WeightTable) -> MuseResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("save_table begin: {e}")))?;

    match save_table_inner(&tx, table) {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("save_table commit: {e}")))?;
            Ok(())
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

fn save_table_inner(conn: &Connection, table: &WeightTable) -> MuseResult<()> {
    for (category, state) in table.iter() {
        conn.execute(
            "INSERT INTO category_weights (category, weight, observations, updated_at)
             VALUES (?1, ?2, ?3, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
             ON CONFLICT(category) DO UPDATE SET
                 weight = excluded.weight,
                 observations = excluded.observations,
                 updated_at = excluded.updated_at",
            params![
                category.as_str(),
                state.weight.value(),
                state.observations as i64
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}

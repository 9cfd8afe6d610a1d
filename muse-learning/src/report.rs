//! Diagnostics: the weight table as sorted stats rows.

use muse_core::models::CategoryStats;
use muse_core::WeightTable;

/// Snapshot the table as stats rows, heaviest category first.
/// Ties break by category name so the report order is stable.
pub fn stats(table: &WeightTable) -> Vec<CategoryStats> {
    let mut rows: Vec<CategoryStats> = table
        .iter()
        .map(|(category, state)| CategoryStats {
            category: category.clone(),
            weight: state.weight,
            observations: state.observations,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.weight
            .value()
            .partial_cmp(&a.weight.value())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use muse_core::weights::{Category, CategoryState, Weight};

    #[test]
    fn ties_break_by_category_name() {
        let table = WeightTable::from_entries([
            (
                Category::new("Zeta"),
                CategoryState {
                    weight: Weight::new(1.0),
                    observations: 0,
                },
            ),
            (
                Category::new("Alpha"),
                CategoryState {
                    weight: Weight::new(1.0),
                    observations: 0,
                },
            ),
        ]);
        let rows = stats(&table);
        assert_eq!(rows[0].category, Category::new("Alpha"));
        assert_eq!(rows[1].category, Category::new("Zeta"));
    }

    #[test]
    fn empty_table_gives_empty_report() {
        assert!(stats(&WeightTable::new()).is_empty());
    }
}

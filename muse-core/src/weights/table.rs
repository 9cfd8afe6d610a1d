//! The in-memory weight table: Category -> (Weight, ObservationCount).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Category, Weight};

/// Per-category learned state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryState {
    pub weight: Weight,
    /// Outcomes recorded for this category. Diagnostics only —
    /// selection math uses the weight alone.
    pub observations: u64,
}

impl CategoryState {
    /// Fresh state at the given neutral weight.
    pub fn neutral(neutral_weight: f64) -> Self {
        Self {
            weight: Weight::new(neutral_weight),
            observations: 0,
        }
    }
}

/// Owned map of category -> learned state.
///
/// Created empty at startup or loaded from a persisted store. There is
/// exactly one writer (the learning engine); selectors only read, except
/// for seeding categories the catalog knows but the table does not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    entries: HashMap<Category, CategoryState>,
}

impl WeightTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (category, state) pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (Category, CategoryState)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, category: &Category) -> Option<CategoryState> {
        self.entries.get(category).copied()
    }

    /// Weight for a category, or the given neutral default when unseen.
    pub fn weight_or(&self, category: &Category, neutral: f64) -> f64 {
        self.entries
            .get(category)
            .map(|s| s.weight.value())
            .unwrap_or(neutral)
    }

    /// Insert the category at the neutral weight if absent.
    /// Returns the current state either way.
    pub fn register(&mut self, category: &Category, neutral: f64) -> CategoryState {
        *self
            .entries
            .entry(category.clone())
            .or_insert_with(|| CategoryState::neutral(neutral))
    }

    /// Store the state for a category, replacing any existing entry.
    pub fn set(&mut self, category: Category, state: CategoryState) {
        self.entries.insert(category, state);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &CategoryState)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_inserts_neutral_once() {
        let mut table = WeightTable::new();
        let category = Category::new("Finance");

        let first = table.register(&category, 1.0);
        assert_eq!(first.weight.value(), 1.0);
        assert_eq!(first.observations, 0);

        // A second register must not reset accumulated state.
        let mut state = first;
        state.observations = 3;
        table.set(category.clone(), state);
        let again = table.register(&category, 1.0);
        assert_eq!(again.observations, 3);
    }

    #[test]
    fn weight_or_falls_back_to_neutral() {
        let table = WeightTable::new();
        assert_eq!(table.weight_or(&Category::new("unseen"), 1.0), 1.0);
    }

    #[test]
    fn set_replaces_existing_entry() {
        let mut table = WeightTable::new();
        let category = Category::new("Tech");
        table.register(&category, 1.0);
        table.set(
            category.clone(),
            CategoryState {
                weight: Weight::new(2.5),
                observations: 7,
            },
        );
        let state = table.get(&category).unwrap();
        assert_eq!(state.weight.value(), 2.5);
        assert_eq!(state.observations, 7);
        assert_eq!(table.len(), 1);
    }
}

//! Integration tests for weighted selection.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use muse_core::config::SelectionConfig;
use muse_core::errors::{MuseError, SelectionError};
use muse_core::traits::{ICategoryCatalog, ISelector};
use muse_core::weights::{Category, CategoryState, Weight, WeightTable};

use muse_selection::{StaticCatalog, WeightedSelector};

fn catalog_abc() -> Arc<StaticCatalog> {
    Arc::new(StaticCatalog::from_pairs([
        (Category::new("A"), vec!["a1".to_string(), "a2".to_string()]),
        (Category::new("B"), vec!["b1".to_string()]),
        (Category::new("C"), vec!["c1".to_string()]),
    ]))
}

fn table_with(weights: &[(&str, f64)]) -> Arc<RwLock<WeightTable>> {
    let table = WeightTable::from_entries(weights.iter().map(|(name, w)| {
        (
            Category::new(*name),
            CategoryState {
                weight: Weight::new(*w),
                observations: 0,
            },
        )
    }));
    Arc::new(RwLock::new(table))
}

#[test]
fn empty_catalog_is_an_error() {
    let table = Arc::new(RwLock::new(WeightTable::new()));
    let selector = WeightedSelector::new(table, Arc::new(StaticCatalog::new()));
    let err = selector.select_category().unwrap_err();
    assert!(matches!(
        err,
        MuseError::Selection(SelectionError::EmptyCatalog)
    ));
}

#[test]
fn selection_seeds_missing_categories_at_neutral() {
    let table = Arc::new(RwLock::new(WeightTable::new()));
    let selector = WeightedSelector::with_seed(
        Arc::clone(&table),
        catalog_abc(),
        &SelectionConfig::default(),
        11,
    );

    selector.select_category().unwrap();

    let table = table.read().unwrap();
    assert_eq!(table.len(), 3);
    for name in ["A", "B", "C"] {
        let state = table.get(&Category::new(name)).unwrap();
        assert_eq!(state.weight.value(), 1.0);
        assert_eq!(state.observations, 0);
    }
}

#[test]
fn empirical_frequency_tracks_weights() {
    let table = table_with(&[("A", 2.0), ("B", 0.5), ("C", 1.0)]);
    let selector =
        WeightedSelector::with_seed(table, catalog_abc(), &SelectionConfig::default(), 42);

    let draws = 10_000;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..draws {
        let category = selector.select_category().unwrap();
        *counts.entry(category.to_string()).or_default() += 1;
    }

    let total_weight = 3.5;
    for (name, weight) in [("A", 2.0), ("B", 0.5), ("C", 1.0)] {
        let expected = weight / total_weight;
        let observed = counts[name] as f64 / draws as f64;
        assert!(
            (observed - expected).abs() < 0.03,
            "{name}: expected {expected:.3}, observed {observed:.3}"
        );
    }
}

#[test]
fn floor_weight_category_remains_selectable() {
    let table = table_with(&[("A", 5.0), ("B", 0.1), ("C", 5.0)]);
    let selector =
        WeightedSelector::with_seed(table, catalog_abc(), &SelectionConfig::default(), 7);

    let mut picked_b = false;
    for _ in 0..10_000 {
        if selector.select_category().unwrap() == Category::new("B") {
            picked_b = true;
            break;
        }
    }
    assert!(picked_b, "floor-weight category was never selected");
}

#[test]
fn selection_never_changes_existing_weights() {
    let table = table_with(&[("A", 2.0), ("B", 0.5), ("C", 1.0)]);
    let selector = WeightedSelector::with_seed(
        Arc::clone(&table),
        catalog_abc(),
        &SelectionConfig::default(),
        3,
    );

    for _ in 0..100 {
        selector.select_category().unwrap();
    }

    let table = table.read().unwrap();
    assert_eq!(table.get(&Category::new("A")).unwrap().weight.value(), 2.0);
    assert_eq!(table.get(&Category::new("B")).unwrap().weight.value(), 0.5);
    assert_eq!(table.get(&Category::new("C")).unwrap().weight.value(), 1.0);
}

#[test]
fn next_topic_composes_title_from_template() {
    let table = Arc::new(RwLock::new(WeightTable::new()));
    let selector = WeightedSelector::with_seed(
        table,
        catalog_abc(),
        &SelectionConfig::default(),
        5,
    );

    let topic = selector.next_topic().unwrap();
    let keywords = catalog_abc().keywords(&topic.category);
    assert!(keywords.contains(&topic.keyword));
    assert_eq!(
        topic.title,
        format!("The Future of {} in {}", topic.keyword, topic.category)
    );
}

#[test]
fn next_topic_fails_without_keywords() {
    let catalog = Arc::new(StaticCatalog::from_pairs([(Category::new("Empty"), vec![])]));
    let table = Arc::new(RwLock::new(WeightTable::new()));
    let selector = WeightedSelector::new(table, catalog);

    let err = selector.next_topic().unwrap_err();
    assert!(matches!(
        err,
        MuseError::Selection(SelectionError::NoKeywords { .. })
    ));
}

#[test]
fn seeded_selectors_are_reproducible() {
    let picks = |seed: u64| -> Vec<Category> {
        let table = table_with(&[("A", 2.0), ("B", 0.5), ("C", 1.0)]);
        let selector =
            WeightedSelector::with_seed(table, catalog_abc(), &SelectionConfig::default(), seed);
        (0..20).map(|_| selector.select_category().unwrap()).collect()
    };
    assert_eq!(picks(99), picks(99));
}

//! Property tests: the clamping invariant holds under arbitrary outcome
//! sequences, and observation counts track recorded outcomes exactly.

use std::sync::{Arc, RwLock};

use proptest::prelude::*;

use muse_core::traits::IOutcomeRecorder;
use muse_core::weights::{Category, WeightTable};
use muse_learning::LearningEngine;

proptest! {
    #[test]
    fn prop_weights_stay_clamped(
        metrics in prop::collection::vec(0.0f64..5_000.0, 1..200),
        names in prop::collection::vec("[a-d]", 1..200),
    ) {
        let table = Arc::new(RwLock::new(WeightTable::new()));
        let engine = LearningEngine::new(Arc::clone(&table));

        for (metric, name) in metrics.iter().zip(names.iter().cycle()) {
            engine.record_outcome(&Category::new(name.clone()), *metric).unwrap();
            // The invariant holds after every single call, not just at the end.
            let table = table.read().unwrap();
            for (_, state) in table.iter() {
                prop_assert!(state.weight.value() >= 0.1);
                prop_assert!(state.weight.value() <= 5.0);
            }
        }
    }

    #[test]
    fn prop_observations_match_recorded_outcomes(
        metrics in prop::collection::vec(0.0f64..5_000.0, 1..100),
    ) {
        let table = Arc::new(RwLock::new(WeightTable::new()));
        let engine = LearningEngine::new(Arc::clone(&table));
        let category = Category::new("solo");

        for metric in &metrics {
            engine.record_outcome(&category, *metric).unwrap();
        }

        let state = table.read().unwrap().get(&category).unwrap();
        prop_assert_eq!(state.observations, metrics.len() as u64);
    }
}

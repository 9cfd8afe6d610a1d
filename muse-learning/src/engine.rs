//! LearningEngine: implements IOutcomeRecorder, owns the update rule.

use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use muse_core::config::{LearningConfig, MuseConfig};
use muse_core::errors::{LearningError, MuseError, MuseResult};
use muse_core::models::{CategoryStats, EngagementSample};
use muse_core::traits::{IOutcomeRecorder, IWeightStore};
use muse_core::{Category, Weight, WeightTable};

use crate::report;

/// The learning engine.
///
/// Sole writer of the weight table: applies the three-way threshold rule to
/// each observed outcome and clamps the result to the configured range.
/// Persistence happens after the write lock is released, and a failed save
/// is logged rather than propagated — in-process selection does not depend
/// on durability.
pub struct LearningEngine {
    table: Arc<RwLock<WeightTable>>,
    config: LearningConfig,
    /// Weight assigned to first-seen categories.
    neutral_weight: f64,
    store: Option<Arc<dyn IWeightStore>>,
}

impl LearningEngine {
    /// Create an engine over a shared weight table with default parameters.
    pub fn new(table: Arc<RwLock<WeightTable>>) -> Self {
        Self {
            table,
            config: LearningConfig::default(),
            neutral_weight: muse_core::config::defaults::DEFAULT_NEUTRAL_WEIGHT,
            store: None,
        }
    }

    /// Create with explicit configuration. Fails when the learning
    /// parameters are inconsistent.
    pub fn with_config(table: Arc<RwLock<WeightTable>>, config: &MuseConfig) -> MuseResult<Self> {
        config.learning.validate()?;
        Ok(Self {
            table,
            config: config.learning.clone(),
            neutral_weight: config.selection.neutral_weight,
            store: None,
        })
    }

    /// Attach a persistence backend, loading previously saved weights into
    /// the table. Categories already present in the table keep their state.
    pub fn with_store(self, store: Arc<dyn IWeightStore>) -> MuseResult<Self> {
        let loaded = store.load_weights()?;
        {
            let mut table = self.table.write().map_err(|_| MuseError::LockPoisoned {
                context: "weight table write".to_string(),
            })?;
            for (category, state) in loaded.iter() {
                if table.get(category).is_none() {
                    table.set(category.clone(), *state);
                }
            }
        }
        Ok(Self {
            store: Some(store),
            ..self
        })
    }

    /// Snapshot of the table as stats rows, heaviest category first.
    pub fn stats(&self) -> MuseResult<Vec<CategoryStats>> {
        let table = self.table.read().map_err(|_| MuseError::LockPoisoned {
            context: "weight table read".to_string(),
        })?;
        Ok(report::stats(&table))
    }
}

impl IOutcomeRecorder for LearningEngine {
    fn record_outcome(&self, category: &Category, metric: f64) -> MuseResult<()> {
        // Validate before taking the lock: an invalid metric must leave the
        // table untouched.
        if !metric.is_finite() || metric < 0.0 {
            return Err(LearningError::InvalidMetric { value: metric }.into());
        }

        let snapshot = {
            let mut table = self.table.write().map_err(|_| MuseError::LockPoisoned {
                context: "weight table write".to_string(),
            })?;

            let mut state = table.register(category, self.neutral_weight);
            let old_weight = state.weight.value();

            let mut updated = old_weight;
            if metric > self.config.high_threshold {
                updated += self.config.reward_step;
            } else if metric < self.config.low_threshold {
                updated -= self.config.punish_step;
            }

            state.weight = Weight::new(updated).clamp(self.config.floor, self.config.ceiling);
            state.observations += 1;
            table.set(category.clone(), state);

            info!(
                category = %category,
                metric,
                old_weight,
                new_weight = state.weight.value(),
                observations = state.observations,
                "outcome recorded"
            );

            self.store.is_some().then(|| table.clone())
        };

        // Persist outside the lock. Both writes are non-fatal on failure.
        if let (Some(store), Some(snapshot)) = (&self.store, snapshot) {
            if let Err(e) = store.save_weights(&snapshot) {
                warn!(error = %e, "failed to persist weight table");
            }
            let sample = EngagementSample::new(category.clone(), metric);
            if let Err(e) = store.append_engagement(&sample) {
                warn!(error = %e, "failed to append engagement history");
            }
        }

        Ok(())
    }
}

//! WeightedSelector: picks the next category and topic from learned weights.

use std::sync::{Arc, Mutex, RwLock};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use muse_core::config::SelectionConfig;
use muse_core::errors::{MuseError, MuseResult, SelectionError};
use muse_core::models::Topic;
use muse_core::traits::{ICategoryCatalog, ISelector};
use muse_core::{Category, WeightTable};

use crate::sampler;

/// Weighted category selector.
///
/// Samples a category with probability proportional to its current weight.
/// Never changes weights; the only table mutation is seeding categories the
/// catalog knows but the table does not, at the neutral weight.
pub struct WeightedSelector {
    table: Arc<RwLock<WeightTable>>,
    catalog: Arc<dyn ICategoryCatalog>,
    /// Weight assumed for categories never seen before.
    neutral_weight: f64,
    /// Template for composed topic titles.
    title_template: String,
    rng: Mutex<StdRng>,
}

impl WeightedSelector {
    /// Create a selector over a shared weight table with default settings.
    pub fn new(table: Arc<RwLock<WeightTable>>, catalog: Arc<dyn ICategoryCatalog>) -> Self {
        Self::with_config(table, catalog, &SelectionConfig::default())
    }

    /// Create with explicit selection configuration.
    pub fn with_config(
        table: Arc<RwLock<WeightTable>>,
        catalog: Arc<dyn ICategoryCatalog>,
        config: &SelectionConfig,
    ) -> Self {
        Self {
            table,
            catalog,
            neutral_weight: config.neutral_weight,
            title_template: config.title_template.clone(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create with a fixed RNG seed, for reproducible selection in tests.
    pub fn with_seed(
        table: Arc<RwLock<WeightTable>>,
        catalog: Arc<dyn ICategoryCatalog>,
        config: &SelectionConfig,
        seed: u64,
    ) -> Self {
        let mut selector = Self::with_config(table, catalog, config);
        selector.rng = Mutex::new(StdRng::seed_from_u64(seed));
        selector
    }

    /// Insert catalog categories missing from the table at the neutral
    /// weight. Takes the write lock only when something is actually missing.
    fn seed_missing(&self, categories: &[Category]) -> MuseResult<()> {
        let missing: Vec<Category> = {
            let table = self.table.read().map_err(|_| MuseError::LockPoisoned {
                context: "weight table read".to_string(),
            })?;
            categories
                .iter()
                .filter(|c| table.get(c).is_none())
                .cloned()
                .collect()
        };
        if missing.is_empty() {
            return Ok(());
        }

        let mut table = self.table.write().map_err(|_| MuseError::LockPoisoned {
            context: "weight table write".to_string(),
        })?;
        for category in missing {
            debug!(category = %category, weight = self.neutral_weight, "seeding category");
            table.register(&category, self.neutral_weight);
        }
        Ok(())
    }
}

impl ISelector for WeightedSelector {
    fn select_category(&self) -> MuseResult<Category> {
        let categories = self.catalog.categories();
        if categories.is_empty() {
            return Err(SelectionError::EmptyCatalog.into());
        }
        self.seed_missing(&categories)?;

        let weights: Vec<f64> = {
            let table = self.table.read().map_err(|_| MuseError::LockPoisoned {
                context: "weight table read".to_string(),
            })?;
            categories
                .iter()
                .map(|c| table.weight_or(c, self.neutral_weight))
                .collect()
        };

        let index = {
            let mut rng = self.rng.lock().map_err(|_| MuseError::LockPoisoned {
                context: "selector rng".to_string(),
            })?;
            // Total weight can be zero when the floor is configured to 0.0
            // and every category has been punished there; fall back to a
            // uniform pick so selection still returns a category.
            match sampler::sample_index(&mut *rng, &weights) {
                Some(index) => index,
                None => rng.gen_range(0..categories.len()),
            }
        };

        let category = categories[index].clone();
        info!(category = %category, weight = weights[index], "category selected");
        Ok(category)
    }

    fn next_topic(&self) -> MuseResult<Topic> {
        let category = self.select_category()?;
        let keywords = self.catalog.keywords(&category);
        if keywords.is_empty() {
            return Err(SelectionError::NoKeywords {
                category: category.to_string(),
            }
            .into());
        }

        let keyword = {
            let mut rng = self.rng.lock().map_err(|_| MuseError::LockPoisoned {
                context: "selector rng".to_string(),
            })?;
            keywords[rng.gen_range(0..keywords.len())].clone()
        };

        let topic = Topic::compose(category, keyword, &self.title_template);
        debug!(title = %topic.title, "topic composed");
        Ok(topic)
    }
}

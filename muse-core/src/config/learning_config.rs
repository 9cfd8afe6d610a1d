use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ValidationError;

/// Learning subsystem configuration: the reward/punish/clamp rule parameters.
///
/// The numeric values are deployment-tunable; only the rule shape (three-way
/// threshold comparison, additive step, clamped range) is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Lower clamp bound for weights.
    pub floor: f64,
    /// Upper clamp bound for weights.
    pub ceiling: f64,
    /// Weight increase when engagement beats `high_threshold`.
    pub reward_step: f64,
    /// Weight decrease when engagement misses `low_threshold`.
    pub punish_step: f64,
    /// Engagement above this rewards the category.
    pub high_threshold: f64,
    /// Engagement below this punishes the category.
    pub low_threshold: f64,
}

impl LearningConfig {
    /// Check parameter consistency. Steps may be zero (learning disabled)
    /// but never negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.floor > self.ceiling {
            return Err(ValidationError::InvalidBounds {
                floor: self.floor,
                ceiling: self.ceiling,
            });
        }
        if self.low_threshold > self.high_threshold {
            return Err(ValidationError::InvalidThresholds {
                low: self.low_threshold,
                high: self.high_threshold,
            });
        }
        if self.reward_step < 0.0 {
            return Err(ValidationError::NegativeStep {
                name: "reward_step".to_string(),
                value: self.reward_step,
            });
        }
        if self.punish_step < 0.0 {
            return Err(ValidationError::NegativeStep {
                name: "punish_step".to_string(),
                value: self.punish_step,
            });
        }
        Ok(())
    }
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            floor: defaults::DEFAULT_WEIGHT_FLOOR,
            ceiling: defaults::DEFAULT_WEIGHT_CEILING,
            reward_step: defaults::DEFAULT_REWARD_STEP,
            punish_step: defaults::DEFAULT_PUNISH_STEP,
            high_threshold: defaults::DEFAULT_HIGH_THRESHOLD,
            low_threshold: defaults::DEFAULT_LOW_THRESHOLD,
        }
    }
}

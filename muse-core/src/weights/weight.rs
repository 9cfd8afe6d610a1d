use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::defaults;

/// Per-category selection weight.
///
/// Controls relative selection probability: a category with weight 2.0 is
/// picked twice as often as one with weight 1.0. The valid range
/// `[floor, ceiling]` is configuration, not protocol, so clamping takes
/// explicit bounds instead of living in the constructor.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Create a new Weight from a raw value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Clamp to `[floor, ceiling]` inclusive.
    pub fn clamp(self, floor: f64, ceiling: f64) -> Self {
        Self(self.0.clamp(floor, ceiling))
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self(defaults::DEFAULT_NEUTRAL_WEIGHT)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Weight> for f64 {
    fn from(w: Weight) -> Self {
        w.0
    }
}

//! Default values for every config section.

/// Weight assigned to a category the first time it is seen.
pub const DEFAULT_NEUTRAL_WEIGHT: f64 = 1.0;
/// Template for composed topic titles.
pub const DEFAULT_TITLE_TEMPLATE: &str = "The Future of {keyword} in {category}";

/// Lower clamp bound for weights.
pub const DEFAULT_WEIGHT_FLOOR: f64 = 0.1;
/// Upper clamp bound for weights.
pub const DEFAULT_WEIGHT_CEILING: f64 = 5.0;
/// Added to a weight when engagement beats the high threshold.
pub const DEFAULT_REWARD_STEP: f64 = 0.2;
/// Subtracted from a weight when engagement misses the low threshold.
pub const DEFAULT_PUNISH_STEP: f64 = 0.1;
/// Engagement above this rewards the category.
pub const DEFAULT_HIGH_THRESHOLD: f64 = 1_000.0;
/// Engagement below this punishes the category.
pub const DEFAULT_LOW_THRESHOLD: f64 = 500.0;

/// Database file for the SQLite store.
pub const DEFAULT_DB_PATH: &str = "muse.db";
/// SQLite busy timeout.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
/// Engagement-history rows returned when the caller gives no limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Muse system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound on engagement history rows returned by a single query.
pub const MAX_HISTORY_LIMIT: usize = 1_000;

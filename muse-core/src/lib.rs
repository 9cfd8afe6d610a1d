//! # muse-core
//!
//! Foundation crate for the Muse topic selection engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod weights;

// Re-export the most commonly used types at the crate root.
pub use config::MuseConfig;
pub use errors::{MuseError, MuseResult};
pub use weights::{Category, CategoryState, Weight, WeightTable};

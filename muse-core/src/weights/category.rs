use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque category identifier (e.g. "Finance", "Tech").
/// The set of categories is fixed at startup by the catalog; the selector
/// never creates or destroys categories at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}

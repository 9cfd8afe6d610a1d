use serde::{Deserialize, Serialize};

use crate::weights::Category;

/// A concrete topic: a category plus one of its keywords, with the title
/// rendered from the configured template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub category: Category,
    pub keyword: String,
    pub title: String,
}

impl Topic {
    /// Compose from a title template. `{keyword}` and `{category}` are
    /// substituted; any other text passes through verbatim.
    pub fn compose(category: Category, keyword: impl Into<String>, template: &str) -> Self {
        let keyword = keyword.into();
        let title = template
            .replace("{keyword}", &keyword)
            .replace("{category}", category.as_str());
        Self {
            category,
            keyword,
            title,
        }
    }
}

use crate::weights::Category;

/// Static list of eligible categories and their topic keywords.
///
/// Implementations must return categories in a stable order so that
/// sampling and tests are reproducible. Where the list comes from
/// (hardcoded, config file, feed) is the caller's concern.
pub trait ICategoryCatalog: Send + Sync {
    /// Ordered list of eligible categories.
    fn categories(&self) -> Vec<Category>;

    /// Topic keywords for a category. Empty when the category is unknown.
    fn keywords(&self, category: &Category) -> Vec<String>;
}

/// Selection-path errors.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("no categories available: the catalog is empty")]
    EmptyCatalog,

    #[error("category '{category}' has no keywords in the catalog")]
    NoKeywords { category: String },
}

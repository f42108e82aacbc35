use thiserror::Error;

/// Violations found while building a [`Catalog`](crate::catalog::Catalog).
///
/// Kept separate from [`DataCheatError`] and `Clone` so the lazily validated
/// built-in catalog can hand the same failure to every caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),

    #[error("Entry has an empty id (title: {0})")]
    EmptyId(String),

    #[error("Entry {id} uses unknown category: {category}")]
    UnknownCategory { id: String, category: String },

    #[error("Malformed category key (expected <language>-<subtag>): {0}")]
    MalformedCategory(String),
}

#[derive(Error, Debug)]
pub enum DataCheatError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Unknown language: {0} (expected sql, powerquery or dax)")]
    UnknownLanguage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, DataCheatError>;

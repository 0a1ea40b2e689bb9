use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog integrity errors. All of these are fatal at startup: the engine
/// refuses to serve queries against a known-invalid catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,

    #[error("catalog entry #{index} has an empty or whitespace name")]
    InvalidName { index: usize },

    #[error("duplicate tool name '{0}' in catalog")]
    DuplicateName(String),

    #[error("malformed tool index: {0}")]
    Parse(#[from] serde_json::Error),
}

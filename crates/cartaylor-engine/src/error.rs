//! Catalog and rule loading errors.

use cartaylor_config::ConfigError;
use cartaylor_core::CarTaylorError;
use thiserror::Error;

/// Error raised while loading a catalog document or its rules.
///
/// A failed load leaves the catalog and the rule store untouched.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("part type '{part}' references unknown category '{category}'")]
    UnknownCategory { part: String, category: String },

    #[error("part type '{part}' has negative price {price}")]
    NegativePrice { part: String, price: i64 },

    #[error("invalid part type record #{index}: {source}")]
    InvalidRecord {
        index: usize,
        source: CarTaylorError,
    },

    #[error("unknown part '{0}'")]
    UnknownPart(String),

    #[error("ambiguous part reference '{0}', qualify it as Category/Name")]
    AmbiguousPart(String),
}

impl From<LoadError> for CarTaylorError {
    fn from(err: LoadError) -> Self {
        CarTaylorError::Load(err.to_string())
    }
}

/// Result type alias for loading operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

//! Error types for CarTaylor

use thiserror::Error;

/// Main error type for configurator operations
#[derive(Debug, Error)]
pub enum CarTaylorError {
    /// An argument does not denote anything the callee knows about
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A value was constructed in violation of its invariants
    #[error("Invariant violation: {0}")]
    Invariant(String),

    /// A part instance could not be produced from its part type
    #[error("Part instantiation error: {0}")]
    Instantiation(String),

    /// Loading a catalog or its rules failed
    #[error("Catalog load error: {0}")]
    Load(String),
}

impl CarTaylorError {
    /// Returns true for [`CarTaylorError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns true for [`CarTaylorError::Invariant`].
    pub fn is_invariant(&self) -> bool {
        matches!(self, Self::Invariant(_))
    }
}

/// Result type alias for configurator operations
pub type Result<T> = std::result::Result<T, CarTaylorError>;

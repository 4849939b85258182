//! Error types for IDE operations.

use thiserror::Error;

/// Errors that can occur while computing folding regions.
#[derive(Debug, Error)]
pub enum FoldingError {
    /// The caller passed a node or document that breaks the contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error while reading or writing settings.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be (de)serialized.
    #[cfg(feature = "serde")]
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

impl FoldingError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

//! Serialization error types

use sdlc_domain::{DomainError, PathDerivationError};
use thiserror::Error;

/// Errors raised while converting entities to or from their file form.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// The entity content cannot be represented in the target format.
    #[error("entity encoding failed: {0}")]
    Encoding(String),

    /// The input is not a well-formed entity document.
    #[error("entity decoding failed: {0}")]
    Decoding(String),

    /// The document is well-formed but its content does not yield a path.
    #[error(transparent)]
    PathDerivation(#[from] PathDerivationError),

    /// Reading from or writing to the underlying stream failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DomainError> for SerializationError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::PathDerivation(e) => Self::PathDerivation(e),
            other => Self::Encoding(other.to_string()),
        }
    }
}

impl SerializationError {
    /// Returns true for failures caused by the document rather than the
    /// stream: decoding and path derivation errors.
    #[must_use]
    pub const fn is_invalid_document(&self) -> bool {
        matches!(self, Self::Decoding(_) | Self::PathDerivation(_))
    }
}

/// Result type alias for serialization operations.
pub type SerializationResult<T> = Result<T, SerializationError>;

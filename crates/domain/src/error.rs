//! Domain error types

use thiserror::Error;

/// Reasons an entity path cannot be computed from entity content.
///
/// A document can be syntactically valid and still fail here: the path of an
/// entity lives in the `name` and `package` keys of its content.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PathDerivationError {
    /// The content mapping is absent or null.
    #[error("could not compute entity path: content is missing")]
    MissingContent,

    /// The content has no `name` key.
    #[error("could not compute entity path: content has no \"name\"")]
    MissingName,

    /// The `name` key holds something other than a string.
    #[error("could not compute entity path: \"name\" is not a string")]
    NonStringName,

    /// The `package` key holds something other than a string.
    #[error("could not compute entity path: \"package\" is not a string")]
    NonStringPackage,
}

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The entity path could not be derived from content.
    #[error(transparent)]
    PathDerivation(#[from] PathDerivationError),

    /// A value could not be converted into entity content.
    #[error("unsupported entity content: {0}")]
    UnsupportedContent(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

//! SDLC Domain - Core model types
//!
//! This crate defines model entities and the rules for their paths.
//! All types here are pure Rust with no I/O dependencies.

pub mod entity;
pub mod error;
pub mod path;

pub use entity::{Entity, EntityContent, content_from_serializable};
pub use error::{DomainError, DomainResult, PathDerivationError};
pub use path::{PACKAGE_SEPARATOR, derive_entity_path, join_path, split_path};

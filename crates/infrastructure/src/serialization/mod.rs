//! Deterministic JSON serialization for entity files.
//!
//! Ensures clean Git diffs by:
//! - Sorting object keys alphabetically at every depth
//! - Using a fixed indentation (2 spaces by default)
//! - Using `\n` line endings and a trailing newline
//! - UTF-8 encoding without BOM

mod entity;
mod formatter;
mod json;

pub use entity::JsonEntitySerializer;
pub use formatter::JacksonFormatter;
pub use json::{Canonical, CanonicalMap, to_canonical_json, to_json_pretty};

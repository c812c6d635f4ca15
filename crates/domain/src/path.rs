//! Entity paths.
//!
//! An entity path is a `::`-separated sequence of segments, for example
//! `model::domain::Person`. The last segment is the entity name, everything
//! before it is the package. Entity files do not store the path: it is
//! recomputed from the `name` and `package` keys of the entity content.

use serde_json::Value;

use crate::entity::EntityContent;
use crate::error::PathDerivationError;

/// Separator between package segments and the entity name.
pub const PACKAGE_SEPARATOR: &str = "::";

/// Content key holding the entity name.
pub const NAME_KEY: &str = "name";

/// Content key holding the entity package.
pub const PACKAGE_KEY: &str = "package";

/// Joins a package and a name into a full entity path.
#[must_use]
pub fn join_path(package: &str, name: &str) -> String {
    format!("{package}{PACKAGE_SEPARATOR}{name}")
}

/// Splits an entity path into its package (if any) and its name.
///
/// ```
/// use sdlc_domain::path::split_path;
///
/// assert_eq!(split_path("model::domain::Person"), (Some("model::domain"), "Person"));
/// assert_eq!(split_path("Person"), (None, "Person"));
/// ```
#[must_use]
pub fn split_path(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once(PACKAGE_SEPARATOR) {
        Some((package, name)) => (Some(package), name),
        None => (None, path),
    }
}

/// Computes an entity path from entity content.
///
/// Only the top-level `name` and `package` keys are inspected:
/// - `name` must be a string
/// - a missing or null `package` yields `name`
/// - a string `package` yields `package::name`
///
/// # Errors
///
/// Returns a `PathDerivationError` naming the first rule the content breaks.
pub fn derive_entity_path(content: Option<&EntityContent>) -> Result<String, PathDerivationError> {
    let content = content.ok_or(PathDerivationError::MissingContent)?;

    let name = match content.get(NAME_KEY) {
        Some(Value::String(name)) => name,
        None | Some(Value::Null) => return Err(PathDerivationError::MissingName),
        Some(_) => return Err(PathDerivationError::NonStringName),
    };

    match content.get(PACKAGE_KEY) {
        None | Some(Value::Null) => Ok(name.clone()),
        Some(Value::String(package)) => Ok(join_path(package, name)),
        Some(_) => Err(PathDerivationError::NonStringPackage),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn content(value: Value) -> EntityContent {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_name_only() {
        let c = content(json!({"name": "Foo"}));
        assert_eq!(derive_entity_path(Some(&c)).unwrap(), "Foo");
    }

    #[test]
    fn test_name_and_package() {
        let c = content(json!({"name": "Foo", "package": "com::x"}));
        assert_eq!(derive_entity_path(Some(&c)).unwrap(), "com::x::Foo");
    }

    #[test]
    fn test_null_package_is_absent() {
        let c = content(json!({"name": "Foo", "package": null}));
        assert_eq!(derive_entity_path(Some(&c)).unwrap(), "Foo");
    }

    #[test]
    fn test_missing_content() {
        assert_eq!(
            derive_entity_path(None),
            Err(PathDerivationError::MissingContent)
        );
    }

    #[test]
    fn test_missing_name() {
        let c = content(json!({"package": "com::x"}));
        assert_eq!(
            derive_entity_path(Some(&c)),
            Err(PathDerivationError::MissingName)
        );
    }

    #[test]
    fn test_null_name() {
        let c = content(json!({"name": null}));
        assert_eq!(
            derive_entity_path(Some(&c)),
            Err(PathDerivationError::MissingName)
        );
    }

    #[test]
    fn test_non_string_name() {
        let c = content(json!({"name": ["Foo"]}));
        assert_eq!(
            derive_entity_path(Some(&c)),
            Err(PathDerivationError::NonStringName)
        );
    }

    #[test]
    fn test_non_string_package() {
        let c = content(json!({"name": "Foo", "package": 123}));
        assert_eq!(
            derive_entity_path(Some(&c)),
            Err(PathDerivationError::NonStringPackage)
        );
    }

    #[test]
    fn test_nested_name_is_ignored() {
        let c = content(json!({"inner": {"name": "Foo"}}));
        assert_eq!(
            derive_entity_path(Some(&c)),
            Err(PathDerivationError::MissingName)
        );
    }

    #[test]
    fn test_split_and_join() {
        assert_eq!(join_path("a::b", "C"), "a::b::C");
        assert_eq!(split_path("a::b::C"), (Some("a::b"), "C"));
        assert_eq!(split_path("C"), (None, "C"));
    }
}

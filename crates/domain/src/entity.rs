//! Model entities.
//!
//! An entity is a named, typed chunk of model content. Its `path` locates it
//! in the model hierarchy, its `classifier_path` names its type, and its
//! `content` carries the payload as arbitrary JSON data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult, PathDerivationError};
use crate::path::{derive_entity_path, split_path};

/// Entity payload: a JSON object with string keys.
///
/// Key order carries no meaning; serializers decide the output order.
pub type EntityContent = Map<String, Value>;

/// A model entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    path: String,
    classifier_path: String,
    content: EntityContent,
}

impl Entity {
    /// Creates an entity from its parts, as given.
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        classifier_path: impl Into<String>,
        content: EntityContent,
    ) -> Self {
        Self {
            path: path.into(),
            classifier_path: classifier_path.into(),
            content,
        }
    }

    /// Creates an entity whose path is derived from the `name` and `package`
    /// keys of its content.
    ///
    /// # Errors
    ///
    /// Returns a `PathDerivationError` if the content does not carry a usable
    /// name or package.
    pub fn from_content(
        classifier_path: impl Into<String>,
        content: EntityContent,
    ) -> Result<Self, PathDerivationError> {
        let path = derive_entity_path(Some(&content))?;
        Ok(Self::new(path, classifier_path, content))
    }

    /// Creates an entity whose content is converted from any serializable
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedContent` if the value cannot be
    /// represented as a JSON object, for example a map with non-string keys
    /// or a value that serializes to something other than an object.
    pub fn from_serializable<T: Serialize + ?Sized>(
        path: impl Into<String>,
        classifier_path: impl Into<String>,
        value: &T,
    ) -> DomainResult<Self> {
        let content = content_from_serializable(value)?;
        Ok(Self::new(path, classifier_path, content))
    }

    /// Returns the full entity path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the path of the entity's classifier.
    #[must_use]
    pub fn classifier_path(&self) -> &str {
        &self.classifier_path
    }

    /// Returns the entity content.
    #[must_use]
    pub const fn content(&self) -> &EntityContent {
        &self.content
    }

    /// Returns the package part of the path, if the entity is not at the root.
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        split_path(&self.path).0
    }

    /// Returns the last segment of the path.
    #[must_use]
    pub fn name(&self) -> &str {
        split_path(&self.path).1
    }

    /// Consumes the entity and returns `(path, classifier_path, content)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String, EntityContent) {
        (self.path, self.classifier_path, self.content)
    }
}

/// Converts a serializable value into entity content.
///
/// # Errors
///
/// Returns `DomainError::UnsupportedContent` if serialization fails or the
/// value is not a JSON object.
pub fn content_from_serializable<T: Serialize + ?Sized>(value: &T) -> DomainResult<EntityContent> {
    match serde_json::to_value(value) {
        Ok(Value::Object(content)) => Ok(content),
        Ok(other) => Err(DomainError::UnsupportedContent(format!(
            "expected an object, found {}",
            value_kind(&other)
        ))),
        Err(e) => Err(DomainError::UnsupportedContent(e.to_string())),
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::ser::{Error as _, Serializer};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn person_content() -> EntityContent {
        let Value::Object(map) = json!({
            "_type": "class",
            "name": "Person",
            "package": "model::domain",
            "properties": [{"name": "firstName", "type": "String"}]
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn test_from_content_derives_path() {
        let entity = Entity::from_content("meta::pure::metamodel::type::Class", person_content())
            .unwrap();
        assert_eq!(entity.path(), "model::domain::Person");
        assert_eq!(entity.package(), Some("model::domain"));
        assert_eq!(entity.name(), "Person");
        assert_eq!(entity.classifier_path(), "meta::pure::metamodel::type::Class");
    }

    #[test]
    fn test_from_content_rejects_missing_name() {
        let result = Entity::from_content("x::Y", EntityContent::new());
        assert_eq!(result, Err(PathDerivationError::MissingName));
    }

    #[test]
    fn test_root_entity_has_no_package() {
        let entity = Entity::new("Person", "x::Y", EntityContent::new());
        assert_eq!(entity.package(), None);
        assert_eq!(entity.name(), "Person");
    }

    #[test]
    fn test_from_serializable_struct() {
        #[derive(Serialize)]
        struct Profile<'a> {
            name: &'a str,
            package: &'a str,
            stereotypes: Vec<&'a str>,
        }

        let entity = Entity::from_serializable(
            "meta::pure::profiles::doc",
            "meta::pure::metamodel::extension::Profile",
            &Profile {
                name: "doc",
                package: "meta::pure::profiles",
                stereotypes: vec!["deprecated"],
            },
        )
        .unwrap();

        assert_eq!(entity.content()["stereotypes"], json!(["deprecated"]));
    }

    #[test]
    fn test_from_serializable_rejects_non_string_keys() {
        let mut value = BTreeMap::new();
        value.insert((1, 2), "tuple key");

        let result = Entity::from_serializable("a::B", "x::Y", &value);
        assert!(matches!(result, Err(DomainError::UnsupportedContent(_))));
    }

    #[test]
    fn test_from_serializable_rejects_opaque_value() {
        struct Opaque;

        impl Serialize for Opaque {
            fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
                Err(S::Error::custom("opaque values have no JSON form"))
            }
        }

        let mut value = BTreeMap::new();
        value.insert("handle", Opaque);

        let result = Entity::from_serializable("a::B", "x::Y", &value);
        assert!(matches!(result, Err(DomainError::UnsupportedContent(msg)) if msg.contains("opaque")));
    }

    #[test]
    fn test_from_serializable_rejects_non_object() {
        let result = Entity::from_serializable("a::B", "x::Y", &vec![1, 2, 3]);
        assert_eq!(
            result,
            Err(DomainError::UnsupportedContent(
                "expected an object, found an array".to_string()
            ))
        );
    }

    #[test]
    fn test_serde_field_names() {
        let entity = Entity::new("a::B", "x::Y", EntityContent::new());
        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(
            value,
            json!({"path": "a::B", "classifierPath": "x::Y", "content": {}})
        );
    }

    #[test]
    fn test_into_parts() {
        let entity = Entity::from_content("x::Y", person_content()).unwrap();
        let (path, classifier_path, content) = entity.into_parts();
        assert_eq!(path, "model::domain::Person");
        assert_eq!(classifier_path, "x::Y");
        assert_eq!(content, person_content());
    }
}

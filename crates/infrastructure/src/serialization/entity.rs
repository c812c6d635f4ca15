//! JSON entity files.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use sdlc_application::{EntitySerializer, SerializationResult};
use sdlc_domain::{Entity, EntityContent, content_from_serializable, derive_entity_path};

use super::json::{CanonicalMap, decoding_error, to_json_pretty};
use crate::config::{ConfigError, JsonCodecConfig};

static SHARED: LazyLock<JsonEntitySerializer> = LazyLock::new(JsonEntitySerializer::new);

/// On-disk form of an entity. The path is not stored: it is derived from
/// the content when the file is read.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntityFileRef<'a> {
    classifier_path: &'a str,
    content: CanonicalMap<'a>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct EntityFile {
    classifier_path: String,
    content: Option<EntityContent>,
}

/// Reads and writes entities as canonical JSON documents:
///
/// ```json
/// {
///   "classifierPath": "meta::pure::metamodel::type::Class",
///   "content": {
///     "name": "Person",
///     "package": "model::domain"
///   }
/// }
/// ```
///
/// Keys are sorted at every depth and the layout is fixed by the
/// [`JsonCodecConfig`] given at construction, so identical entities always
/// produce identical bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonEntitySerializer {
    config: JsonCodecConfig,
}

impl JsonEntitySerializer {
    /// File extension of JSON entity files.
    pub const DEFAULT_FILE_EXTENSION: &'static str = "json";

    /// Creates a serializer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: JsonCodecConfig::default(),
        }
    }

    /// Creates a serializer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: JsonCodecConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the process-wide serializer with the default configuration.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &JsonCodecConfig {
        &self.config
    }

    /// Writes an entity document directly from any serializable content.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError::Encoding` if the content cannot be
    /// represented as a JSON object.
    pub fn serialize_content<T: Serialize + ?Sized>(
        &self,
        classifier_path: &str,
        content: &T,
    ) -> SerializationResult<Vec<u8>> {
        let content = content_from_serializable(content)?;
        self.render(classifier_path, &content)
    }

    fn render(&self, classifier_path: &str, content: &EntityContent) -> SerializationResult<Vec<u8>> {
        let file = EntityFileRef {
            classifier_path,
            content: CanonicalMap::new(content, self.config.key_order()),
        };
        to_json_pretty(&file, &self.config)
    }
}

impl Default for JsonEntitySerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntitySerializer for JsonEntitySerializer {
    fn default_file_extension(&self) -> &str {
        Self::DEFAULT_FILE_EXTENSION
    }

    fn serialize_to_bytes(&self, entity: &Entity) -> SerializationResult<Vec<u8>> {
        let bytes = self.render(entity.classifier_path(), entity.content())?;
        tracing::trace!(path = entity.path(), bytes = bytes.len(), "encoded entity");
        Ok(bytes)
    }

    fn deserialize_bytes(&self, bytes: &[u8]) -> SerializationResult<Entity> {
        let file = read_entity_file(bytes).map_err(|e| {
            tracing::debug!(error = %e, "malformed entity document");
            decoding_error(e)
        })?;

        let path = derive_entity_path(file.content.as_ref()).inspect_err(|e| {
            tracing::debug!(error = %e, classifier_path = %file.classifier_path, "entity path not derivable");
        })?;
        tracing::trace!(path = %path, bytes = bytes.len(), "decoded entity");

        Ok(Entity::new(
            path,
            file.classifier_path,
            file.content.unwrap_or_default(),
        ))
    }
}

/// Parses an entity file without a nesting limit; model content such as
/// function bodies can nest far deeper than serde_json's default of 128.
fn read_entity_file(bytes: &[u8]) -> serde_json::Result<EntityFile> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    deserializer.disable_recursion_limit();
    let file = EntityFile::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(file)
}

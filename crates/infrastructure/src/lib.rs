//! SDLC Infrastructure - Serializer implementations
//!
//! This crate provides the JSON implementation of the entity serializer
//! port defined in the application layer, with its configuration and async
//! stream adapters.

use std::sync::Arc;

use sdlc_application::EntitySerializers;

pub mod config;
pub mod io;
pub mod serialization;

pub use config::{ConfigError, JsonCodecConfig, KeyOrder, PrettyStyle};
pub use io::{deserialize_async, serialize_async};
pub use serialization::{JacksonFormatter, JsonEntitySerializer, to_canonical_json};

/// Returns a registry holding the default serializers: JSON.
#[must_use]
pub fn default_serializers() -> EntitySerializers {
    EntitySerializers::new().with(Arc::new(JsonEntitySerializer::new()))
}

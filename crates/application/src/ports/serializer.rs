//! Entity serializer port
//!
//! Defines the interface for converting entities to and from files.

use std::io::{Read, Write};

use sdlc_domain::Entity;

use crate::{SerializationError, SerializationResult};

/// A file format for entities.
///
/// Implementations are stateless: a single instance may be shared between
/// threads and used for any number of calls. Streams passed in are borrowed;
/// the serializer never closes them.
pub trait EntitySerializer: Send + Sync {
    /// Returns the file extension, without the leading dot, used for files in
    /// this format.
    fn default_file_extension(&self) -> &str;

    /// Returns true if the entity can be written in this format.
    fn can_serialize(&self, _entity: &Entity) -> bool {
        true
    }

    /// Serializes an entity to bytes.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError::Encoding` if the entity cannot be
    /// represented in this format.
    fn serialize_to_bytes(&self, entity: &Entity) -> SerializationResult<Vec<u8>>;

    /// Serializes an entity to a string.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError::Encoding` if the entity cannot be
    /// represented in this format or the output is not UTF-8.
    fn serialize_to_string(&self, entity: &Entity) -> SerializationResult<String> {
        let bytes = self.serialize_to_bytes(entity)?;
        String::from_utf8(bytes).map_err(|e| SerializationError::Encoding(e.to_string()))
    }

    /// Serializes an entity into a writer.
    ///
    /// The document is fully rendered before anything is written, so an
    /// encoding failure leaves the writer untouched.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError::Encoding` if the entity cannot be
    /// represented, or `SerializationError::Io` if writing fails.
    fn serialize(&self, entity: &Entity, writer: &mut dyn Write) -> SerializationResult<()> {
        let bytes = self.serialize_to_bytes(entity)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Deserializes an entity from bytes.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError::Decoding` for malformed documents and
    /// `SerializationError::PathDerivation` if the entity path cannot be
    /// computed from the content.
    fn deserialize_bytes(&self, bytes: &[u8]) -> SerializationResult<Entity>;

    /// Deserializes an entity from a string.
    ///
    /// # Errors
    ///
    /// Same as [`EntitySerializer::deserialize_bytes`].
    fn deserialize_str(&self, text: &str) -> SerializationResult<Entity> {
        self.deserialize_bytes(text.as_bytes())
    }

    /// Deserializes an entity from a reader, consuming it to the end.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError::Io` if reading fails, otherwise the same
    /// errors as [`EntitySerializer::deserialize_bytes`].
    fn deserialize(&self, reader: &mut dyn Read) -> SerializationResult<Entity> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.deserialize_bytes(&bytes)
    }
}

//! Async stream adapters for entity serializers.
//!
//! Streams are borrowed: writers are flushed but never shut down, readers
//! are read to the end but not closed.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use sdlc_application::{EntitySerializer, SerializationResult};
use sdlc_domain::Entity;

/// Serializes an entity into an async writer.
///
/// The document is rendered before anything is written.
///
/// # Errors
///
/// Returns `SerializationError::Encoding` if the entity cannot be
/// represented, or `SerializationError::Io` if writing fails.
pub async fn serialize_async<S, W>(
    serializer: &S,
    entity: &Entity,
    writer: &mut W,
) -> SerializationResult<()>
where
    S: EntitySerializer + ?Sized,
    W: AsyncWrite + Unpin + ?Sized,
{
    let bytes = serializer.serialize_to_bytes(entity)?;
    writer.write_all(&bytes).await?;
    writer.flush().await?;
    Ok(())
}

/// Deserializes an entity from an async reader, consuming it to the end.
///
/// # Errors
///
/// Returns `SerializationError::Io` if reading fails, otherwise the errors of
/// [`EntitySerializer::deserialize_bytes`].
pub async fn deserialize_async<S, R>(serializer: &S, reader: &mut R) -> SerializationResult<Entity>
where
    S: EntitySerializer + ?Sized,
    R: AsyncRead + Unpin + ?Sized,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    serializer.deserialize_bytes(&bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::JsonEntitySerializer;
    use pretty_assertions::assert_eq;
    use sdlc_application::SerializationError;
    use serde_json::json;

    fn entity() -> Entity {
        let serde_json::Value::Object(content) = json!({"name": "Foo", "package": "com::x"}) else {
            unreachable!()
        };
        Entity::from_content("meta::pure::metamodel::type::Class", content).unwrap()
    }

    #[tokio::test]
    async fn test_async_round_trip() {
        let serializer = JsonEntitySerializer::new();
        let mut buffer = Vec::new();
        serialize_async(&serializer, &entity(), &mut buffer).await.unwrap();

        let decoded = deserialize_async(&serializer, &mut buffer.as_slice())
            .await
            .unwrap();
        assert_eq!(decoded, entity());
    }

    #[tokio::test]
    async fn test_async_with_trait_object() {
        let serializer: &dyn EntitySerializer = JsonEntitySerializer::shared();
        let mut buffer = Vec::new();
        serialize_async(serializer, &entity(), &mut buffer).await.unwrap();
        assert_eq!(
            buffer,
            JsonEntitySerializer::shared().serialize_to_bytes(&entity()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_async_malformed_input() {
        let result = deserialize_async(JsonEntitySerializer::shared(), &mut &b"{not valid}"[..]).await;
        assert!(matches!(result, Err(SerializationError::Decoding(_))));
    }
}

//! SDLC Application - Ports and routing
//!
//! This crate defines the application layer with:
//! - The entity serializer port
//! - Extension-based routing between serializers
//! - Serialization error handling

pub mod error;
pub mod ports;
pub mod registry;

pub use error::{SerializationError, SerializationResult};
pub use ports::EntitySerializer;
pub use registry::EntitySerializers;

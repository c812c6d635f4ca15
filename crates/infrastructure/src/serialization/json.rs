//! JSON serialization helpers for deterministic output.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use sdlc_application::{SerializationError, SerializationResult};
use super::formatter::JacksonFormatter;
use crate::config::{JsonCodecConfig, KeyOrder, PrettyStyle};

/// Serializes a JSON value with object keys sorted at every depth.
///
/// The order does not depend on how the value was built or on whether
/// `serde_json` preserves insertion order.
#[derive(Debug, Clone, Copy)]
pub struct Canonical<'a> {
    value: &'a Value,
    order: KeyOrder,
}

impl<'a> Canonical<'a> {
    /// Wraps a value, sorting object keys in the given order.
    #[must_use]
    pub const fn new(value: &'a Value, order: KeyOrder) -> Self {
        Self { value, order }
    }
}

impl Serialize for Canonical<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Object(map) => CanonicalMap::new(map, self.order).serialize(serializer),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&Self::new(item, self.order))?;
                }
                seq.end()
            }
            scalar => scalar.serialize(serializer),
        }
    }
}

/// Serializes object entries with keys sorted at every depth.
///
/// Entries may come from any source and in any order.
#[derive(Debug, Clone)]
pub struct CanonicalMap<'a> {
    entries: Vec<(&'a String, &'a Value)>,
    order: KeyOrder,
}

impl<'a> CanonicalMap<'a> {
    /// Collects and sorts object entries.
    pub fn new<I>(entries: I, order: KeyOrder) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by(|a, b| order.compare(a.0, b.0));
        Self { entries, order }
    }

    /// Returns the keys in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl Serialize for CanonicalMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, &Canonical::new(value, self.order))?;
        }
        map.end()
    }
}

/// Renders a value as pretty-printed JSON using the configured layout.
///
/// The output uses `\n` line endings and UTF-8 without BOM regardless of
/// platform. Key order is whatever `value` serializes; wrap JSON values in
/// [`Canonical`] to sort them.
///
/// # Errors
///
/// Returns `SerializationError::Encoding` if `value` fails to serialize.
pub fn to_json_pretty<T: Serialize + ?Sized>(
    value: &T,
    config: &JsonCodecConfig,
) -> SerializationResult<Vec<u8>> {
    let indent = config.indent();
    let mut buffer = Vec::new();

    match config.style {
        PrettyStyle::Standard => {
            let formatter = PrettyFormatter::with_indent(&indent);
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
            value.serialize(&mut serializer).map_err(encoding_error)?;
        }
        PrettyStyle::Jackson => {
            let formatter = JacksonFormatter::with_indent(&indent);
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
            value.serialize(&mut serializer).map_err(encoding_error)?;
        }
    }

    if config.trailing_newline {
        buffer.push(b'\n');
    }
    Ok(buffer)
}

/// Renders any JSON value in canonical form: sorted keys, configured layout.
///
/// # Errors
///
/// Returns `SerializationError::Encoding` if rendering fails.
pub fn to_canonical_json(value: &Value, config: &JsonCodecConfig) -> SerializationResult<String> {
    let bytes = to_json_pretty(&Canonical::new(value, config.key_order()), config)?;
    String::from_utf8(bytes).map_err(|e| SerializationError::Encoding(e.to_string()))
}

pub(crate) fn encoding_error(error: serde_json::Error) -> SerializationError {
    if error.is_io() {
        SerializationError::Io(error.into())
    } else {
        SerializationError::Encoding(error.to_string())
    }
}

pub(crate) fn decoding_error(error: serde_json::Error) -> SerializationError {
    if error.is_io() {
        SerializationError::Io(error.into())
    } else {
        SerializationError::Decoding(error.to_string())
    }
}

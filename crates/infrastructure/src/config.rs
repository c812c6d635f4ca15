//! JSON codec configuration.
//!
//! A [`JsonCodecConfig`] is built once, validated, and then frozen inside a
//! [`crate::JsonEntitySerializer`]. Every document written by that serializer
//! uses the same layout, which keeps files byte-stable across runs.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Largest accepted indentation width.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Errors raised for invalid codec configuration.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Indentation width outside `1..=MAX_INDENT_WIDTH`.
    #[error("indent width must be between 1 and {max}, got {0}", max = MAX_INDENT_WIDTH)]
    InvalidIndentWidth(usize),

    /// The configuration source could not be parsed.
    #[error("invalid codec configuration: {0}")]
    Parse(String),
}

/// Pretty-printing layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrettyStyle {
    /// One value per line, `"key": value`, empty containers as `{}` and `[]`.
    #[default]
    Standard,
    /// Jackson's default pretty printer: `"key" : value`, arrays kept on the
    /// line of their parent as `[ 1, 2 ]`, empty containers as `{ }` and `[ ]`.
    Jackson,
}

impl PrettyStyle {
    /// Returns the key order used with this layout.
    #[must_use]
    pub const fn key_order(self) -> KeyOrder {
        match self {
            Self::Standard => KeyOrder::Utf8,
            Self::Jackson => KeyOrder::Utf16,
        }
    }
}

/// Ordering of object keys in written documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Byte order of the UTF-8 encoded key.
    #[default]
    Utf8,
    /// Order of UTF-16 code units, as Java sorts strings. Differs from
    /// `Utf8` only when keys mix characters above U+FFFF with characters in
    /// U+E000..=U+FFFF.
    Utf16,
}

impl KeyOrder {
    /// Compares two keys.
    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Utf8 => a.cmp(b),
            Self::Utf16 => a.encode_utf16().cmp(b.encode_utf16()),
        }
    }
}

/// Output settings for the JSON entity codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsonCodecConfig {
    /// Spaces per nesting level.
    pub indent_width: usize,
    /// Pretty-printing layout.
    pub style: PrettyStyle,
    /// Whether a single `\n` follows the closing brace.
    pub trailing_newline: bool,
}

impl Default for JsonCodecConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            style: PrettyStyle::Standard,
            trailing_newline: true,
        }
    }
}

impl JsonCodecConfig {
    /// Layout matching files written by Jackson-based tooling: two-space
    /// indentation, Jackson style, no trailing newline.
    #[must_use]
    pub const fn jackson() -> Self {
        Self {
            indent_width: 2,
            style: PrettyStyle::Jackson,
            trailing_newline: false,
        }
    }

    /// Sets the indentation width.
    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Sets the pretty-printing layout.
    #[must_use]
    pub const fn with_style(mut self, style: PrettyStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets whether documents end with a newline.
    #[must_use]
    pub const fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    /// Checks that the configuration can be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidIndentWidth` if the width is zero or
    /// larger than [`MAX_INDENT_WIDTH`].
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::InvalidIndentWidth(self.indent_width));
        }
        Ok(())
    }

    /// Parses and validates a configuration from a JSON fragment.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed input, or the validation
    /// error for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the key order implied by the layout.
    #[must_use]
    pub const fn key_order(&self) -> KeyOrder {
        self.style.key_order()
    }

    /// Returns the indentation unit as bytes.
    #[must_use]
    pub fn indent(&self) -> Vec<u8> {
        vec![b' '; self.indent_width]
    }
}

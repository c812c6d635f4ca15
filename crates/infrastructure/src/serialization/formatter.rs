//! Jackson-compatible pretty printing.

use std::io;

use serde_json::ser::Formatter;

/// A `serde_json` formatter reproducing the layout of Jackson's default
/// pretty printer.
///
/// Objects put each entry on its own line, separated from its value by
/// `" : "`. Arrays stay on the line of their parent with single spaces
/// around values, so only objects increase the indentation depth:
///
/// ```text
/// {
///   "tags" : [ "a", "b" ],
///   "items" : [ {
///     "id" : 1
///   } ],
///   "empty" : { }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JacksonFormatter<'a> {
    depth: usize,
    has_value: bool,
    indent: &'a [u8],
}

impl<'a> JacksonFormatter<'a> {
    /// Creates a formatter using the given indentation unit.
    #[must_use]
    pub const fn with_indent(indent: &'a [u8]) -> Self {
        Self {
            depth: 0,
            has_value: false,
            indent,
        }
    }

    fn newline<W: ?Sized + io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"\n")?;
        for _ in 0..self.depth {
            writer.write_all(self.indent)?;
        }
        Ok(())
    }
}

impl Default for JacksonFormatter<'_> {
    fn default() -> Self {
        Self::with_indent(b"  ")
    }
}

impl Formatter for JacksonFormatter<'_> {
    #[inline]
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.has_value = false;
        writer.write_all(b"[")
    }

    #[inline]
    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b" ]")
    }

    #[inline]
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        let separator: &[u8] = if first { b" " } else { b", " };
        writer.write_all(separator)
    }

    #[inline]
    fn end_array_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    #[inline]
    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(b"{")
    }

    #[inline]
    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.depth -= 1;
        if self.has_value {
            self.newline(writer)?;
        } else {
            writer.write_all(b" ")?;
        }
        writer.write_all(b"}")
    }

    #[inline]
    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if !first {
            writer.write_all(b",")?;
        }
        self.newline(writer)
    }

    #[inline]
    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b" : ")
    }

    #[inline]
    fn end_object_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::{Serializer, json};

    fn render(value: &serde_json::Value, indent: &[u8]) -> String {
        let mut buffer = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buffer, JacksonFormatter::with_indent(indent));
        value.serialize(&mut serializer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(&json!(1), b"  "), "1");
        assert_eq!(render(&json!("a"), b"  "), "\"a\"");
        assert_eq!(render(&json!(null), b"  "), "null");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(render(&json!({}), b"  "), "{ }");
        assert_eq!(render(&json!([]), b"  "), "[ ]");
        assert_eq!(
            render(&json!({"a": {}, "b": []}), b"  "),
            "{\n  \"a\" : { },\n  \"b\" : [ ]\n}"
        );
    }

    #[test]
    fn test_arrays_are_inline() {
        assert_eq!(render(&json!([1, 2, 3]), b"  "), "[ 1, 2, 3 ]");
        assert_eq!(render(&json!([[1], [2, 3]]), b"  "), "[ [ 1 ], [ 2, 3 ] ]");
    }

    #[test]
    fn test_objects_in_arrays() {
        let value = json!({"items": [{"id": 1}, {"id": 2}]});
        let expected = "{\n  \"items\" : [ {\n    \"id\" : 1\n  }, {\n    \"id\" : 2\n  } ]\n}";
        assert_eq!(render(&value, b"  "), expected);
    }

    #[test]
    fn test_nested_objects_with_wide_indent() {
        let value = json!({"a": {"b": {"c": true}}});
        let expected =
            "{\n    \"a\" : {\n        \"b\" : {\n            \"c\" : true\n        }\n    }\n}";
        assert_eq!(render(&value, b"    "), expected);
    }

    #[test]
    fn test_empty_object_after_populated_sibling() {
        let value = json!({"a": {"x": 1}, "b": {}});
        let expected = "{\n  \"a\" : {\n    \"x\" : 1\n  },\n  \"b\" : { }\n}";
        assert_eq!(render(&value, b"  "), expected);
    }
}

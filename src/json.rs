//! JSON canonical rendering.
//!
//! Strict parsing is tried first; input that fails it gets one more chance
//! through the permissive literal parser (unquoted keys, single quotes,
//! trailing commas). Whatever parses is re-serialized with two-space
//! indentation, one element per line, object keys in insertion order and no
//! trailing whitespace — so the output is always valid strict JSON.

use serde_json::Value;

use crate::error::FormatError;
use crate::parser;

pub fn format_json(text: &str) -> Result<String, FormatError> {
    let value = parse_lenient(text)?;
    canonical_string(&value)
}

pub fn parse_lenient(text: &str) -> Result<Value, FormatError> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Ok(value),
        Err(_) => parser::parse_literal(text),
    }
}

pub fn canonical_string(value: &Value) -> Result<String, FormatError> {
    serde_json::to_string_pretty(value).map_err(|err| FormatError::invalid_json(err.to_string(), None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_object_expands_to_one_element_per_line() {
        let output = format_json(r#"{"a":1,"b":[1,2,3]}"#).unwrap();
        assert_eq!(output, "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2,\n    3\n  ]\n}");
    }

    #[test]
    fn formatting_is_idempotent() {
        let once = format_json(r#"{"x": [1, {"y": "z"}], "w": null}"#).unwrap();
        let twice = format_json(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn relaxed_literals_normalize_to_strict_json() {
        let output = format_json("{a:1, b:'two',}").unwrap();
        assert_eq!(output, "{\n  \"a\": 1,\n  \"b\": \"two\"\n}");
    }

    #[test]
    fn key_order_survives_canonicalization() {
        let output = format_json(r#"{"z":1,"a":2}"#).unwrap();
        assert_eq!(output, "{\n  \"z\": 1,\n  \"a\": 2\n}");
    }

    #[test]
    fn scalars_render_bare() {
        assert_eq!(format_json("42").unwrap(), "42");
        assert_eq!(format_json("\"hi\"").unwrap(), "\"hi\"");
    }

    #[test]
    fn unparseable_input_reports_invalid_json() {
        let err = format_json(r#"{"a": }"#).unwrap_err();
        assert!(matches!(err, FormatError::InvalidJson { .. }));
    }
}

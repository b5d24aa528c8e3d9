//! Decoding of serialized delta documents.

use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::document::{AttributeSet, Document, Op};
use crate::error::DeltaError;

/// Embed fields that carry an image reference, in lookup order.
///
/// `img` is the legacy name still present in older stored documents.
const IMAGE_FIELDS: [&str; 2] = ["image", "img"];

/// Parse a serialized delta document into typed operations.
///
/// A document without an `ops` array parses as empty. Ops without an
/// `insert` payload, and ops whose payload is neither a string nor an object
/// carrying an image reference, are skipped.
///
/// # Errors
///
/// Returns [`DeltaError::MalformedDocument`] if the input is not a JSON
/// object whose `ops` (when present) is an array of op objects.
pub fn parse(raw: &str) -> Result<Document, DeltaError> {
    let mut document: Map<String, Value> = serde_json::from_str(raw)?;
    let raw_ops: Vec<Map<String, Value>> = match document.remove("ops") {
        Some(ops) => serde_json::from_value(ops)?,
        None => Vec::new(),
    };

    let mut ops = Vec::with_capacity(raw_ops.len());
    for (index, op) in raw_ops.into_iter().enumerate() {
        if let Some(op) = classify(index, op)? {
            ops.push(op);
        }
    }

    Ok(Document::new(ops))
}

/// Resolve a raw op into a typed [`Op`], or `None` for unsupported shapes.
///
/// Attributes are only decoded for ops that are kept.
fn classify(index: usize, mut op: Map<String, Value>) -> Result<Option<Op>, DeltaError> {
    let Some(insert) = op.remove("insert") else {
        tracing::debug!(index, "Skipping op without insert");
        return Ok(None);
    };

    match insert {
        Value::String(text) => Ok(Some(Op::Text {
            text,
            attributes: attributes(index, &op)?,
        })),
        Value::Object(embed) => {
            // The first field present decides; a non-string value is not a fallback.
            let source = IMAGE_FIELDS
                .iter()
                .find_map(|field| embed.get(*field))
                .and_then(Value::as_str);
            if let Some(source) = source {
                Ok(Some(Op::Image {
                    source: source.to_owned(),
                    attributes: attributes(index, &op)?,
                }))
            } else {
                tracing::debug!(index, "Skipping unsupported embed");
                Ok(None)
            }
        }
        other => {
            tracing::debug!(index, kind = value_kind(&other), "Skipping unsupported insert");
            Ok(None)
        }
    }
}

/// Decode the `attributes` of a kept op. Missing or null means none.
fn attributes(index: usize, op: &Map<String, Value>) -> Result<AttributeSet, DeltaError> {
    match op.get("attributes") {
        None | Some(Value::Null) => Ok(AttributeSet::default()),
        Some(Value::Object(map)) => Ok(AttributeSet::from_map(map)),
        Some(_) => Err(serde_json::Error::custom(format!(
            "op {index}: attributes must be an object"
        ))
        .into()),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_text_ops() {
        let doc = parse(
            r#"{"ops":[{"insert":"Hello, "},{"insert":"world!","attributes":{"bold":true}},{"insert":"\n"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.ops()[0], Op::text("Hello, "));
        assert!(doc.ops()[1].attributes().bold);
        assert_eq!(doc.ops()[2].as_text(), Some("\n"));
    }

    #[test]
    fn test_parse_missing_ops_is_empty() {
        let doc = parse(r#"{"version": 1}"#).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_image_field() {
        let doc = parse(r#"{"ops":[{"insert":{"image":"a.png"},"attributes":{"width":"100px"}}]}"#)
            .unwrap();
        let Op::Image { source, attributes } = &doc.ops()[0] else {
            panic!("expected image op");
        };
        assert_eq!(source, "a.png");
        assert_eq!(attributes.width.as_deref(), Some("100px"));
    }

    #[test]
    fn test_parse_legacy_image_field() {
        let doc = parse(r#"{"ops":[{"insert":{"img":"b.png"}}]}"#).unwrap();
        assert_eq!(doc.ops()[0], Op::image("b.png"));
    }

    #[test]
    fn test_parse_prefers_image_over_legacy_field() {
        let doc = parse(r#"{"ops":[{"insert":{"image":"new.png","img":"old.png"}}]}"#).unwrap();
        assert_eq!(doc.ops()[0], Op::image("new.png"));
    }

    #[test]
    fn test_parse_skips_unsupported_inserts() {
        let doc = parse(
            r#"{"ops":[{"insert":{"video":"v.mp4"}},{"insert":42},{"retain":3},{"insert":{"image":7}},{"insert":"x\n"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.ops(), &[Op::text("x\n")]);
    }

    #[test]
    fn test_parse_skipped_op_with_bad_attributes() {
        let doc = parse(
            r#"{"ops":[{"insert":{"video":"v"},"attributes":"x"},{"retain":1,"attributes":5},{"insert":"a\n"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.ops(), &[Op::text("a\n")]);
    }

    #[test]
    fn test_parse_non_string_image_does_not_fall_back() {
        let doc = parse(r#"{"ops":[{"insert":{"image":7,"img":"b.png"}},{"insert":"a\n"}]}"#)
            .unwrap();
        assert_eq!(doc.ops(), &[Op::text("a\n")]);
    }

    #[test]
    fn test_parse_image_with_bad_attributes_is_malformed() {
        let err = parse(r#"{"ops":[{"insert":{"image":"a.png"},"attributes":[]}]}"#).unwrap_err();
        assert!(matches!(err, DeltaError::MalformedDocument(_)));
    }

    #[test]
    fn test_parse_null_attributes() {
        let doc = parse(r#"{"ops":[{"insert":"a","attributes":null}]}"#).unwrap();
        assert!(doc.ops()[0].attributes().is_empty());
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse("{not json").unwrap_err();
        assert!(matches!(err, DeltaError::MalformedDocument(_)));
    }

    #[test]
    fn test_parse_malformed_structure() {
        for raw in [
            "[]",
            r#""text""#,
            r#"{"ops": 5}"#,
            r#"{"ops": null}"#,
            r#"{"ops": [1, 2]}"#,
            r#"{"ops": [["x\n", null]]}"#,
            r#"{"ops": [{"insert": "a", "attributes": 3}]}"#,
        ] {
            assert!(parse(raw).is_err(), "expected error for {raw}");
        }
    }
}

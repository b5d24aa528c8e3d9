//! Typed delta document model.
//!
//! A [`Document`] is an immutable, ordered sequence of [`Op`]s. Each op is
//! either a text insert or an image insert; the shape of the raw insert
//! payload is resolved once by the parser and never inspected again.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::DeltaError;

/// A single insert operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    /// Literal text, possibly ending with a line terminator.
    Text {
        /// Inserted text.
        text: String,
        /// Formatting attached to the text.
        attributes: AttributeSet,
    },
    /// Embedded image.
    Image {
        /// Image reference (URL or data URI).
        source: String,
        /// Sizing and alignment attached to the image.
        attributes: AttributeSet,
    },
}

impl Op {
    /// Create a text insert without attributes.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            attributes: AttributeSet::default(),
        }
    }

    /// Create an image insert without attributes.
    #[must_use]
    pub fn image(source: impl Into<String>) -> Self {
        Self::Image {
            source: source.into(),
            attributes: AttributeSet::default(),
        }
    }

    /// Replace the attributes of this op.
    #[must_use]
    pub fn with_attributes(mut self, attrs: AttributeSet) -> Self {
        match &mut self {
            Self::Text { attributes, .. } | Self::Image { attributes, .. } => *attributes = attrs,
        }
        self
    }

    /// Attributes attached to this op.
    #[must_use]
    pub fn attributes(&self) -> &AttributeSet {
        match self {
            Self::Text { attributes, .. } | Self::Image { attributes, .. } => attributes,
        }
    }

    /// Inserted text, if this is a text op.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Image { .. } => None,
        }
    }
}

/// Heading level applied to a whole line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Header {
    /// Top-level heading.
    H1,
    /// Second-level heading.
    H2,
}

impl Header {
    /// Map a raw `header` attribute value to a supported level.
    fn from_level(level: u64) -> Option<Self> {
        match level {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            _ => None,
        }
    }
}

/// Recognized formatting attributes of an op.
///
/// Unknown keys are ignored. Absent keys leave the attribute unset; boolean
/// attributes are only set by an explicit JSON `true`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeSet {
    /// `<strong>` emphasis.
    pub bold: bool,
    /// `<em>` emphasis.
    pub italic: bool,
    /// `<u>` underline.
    pub underline: bool,
    /// `<s>` strikethrough.
    pub strike: bool,
    /// Hyperlink target, interpolated literally.
    pub link: Option<String>,
    /// Heading level for the line (block-level).
    pub header: Option<Header>,
    /// Text alignment for a line, or float alignment for an image.
    pub align: Option<String>,
    /// Rendered image width.
    pub width: Option<String>,
    /// Rendered image height.
    pub height: Option<String>,
}

impl AttributeSet {
    /// Extract the recognized attributes from a raw JSON object.
    #[must_use]
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let flag = |key: &str| matches!(map.get(key), Some(Value::Bool(true)));
        let string = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_owned);

        Self {
            bold: flag("bold"),
            italic: flag("italic"),
            underline: flag("underline"),
            strike: flag("strike"),
            link: string("link"),
            header: map
                .get("header")
                .and_then(Value::as_u64)
                .and_then(Header::from_level),
            align: string("align").filter(|align| !align.is_empty()),
            width: map.get("width").and_then(dimension),
            height: map.get("height").and_then(dimension),
        }
    }

    /// Whether no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Read an image dimension given as a JSON string or number.
fn dimension(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// An ordered, immutable sequence of operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    ops: Vec<Op>,
}

impl Document {
    /// Create a document from already-typed operations.
    #[must_use]
    pub fn new(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    /// Parse a serialized delta document.
    ///
    /// See [`crate::parse`].
    pub fn parse(raw: &str) -> Result<Self, DeltaError> {
        crate::parser::parse(raw)
    }

    /// Operations in document order.
    #[must_use]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the document has no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl FromStr for Document {
    type Err = DeltaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromIterator<Op> for Document {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn attrs(value: &Value) -> AttributeSet {
        AttributeSet::from_map(value.as_object().unwrap())
    }

    #[test]
    fn test_from_map_booleans() {
        let set = attrs(&json!({"bold": true, "italic": false, "underline": true}));
        assert!(set.bold);
        assert!(!set.italic);
        assert!(set.underline);
        assert!(!set.strike);
    }

    #[test]
    fn test_from_map_non_bool_flag_is_unset() {
        let set = attrs(&json!({"bold": "yes", "strike": 1}));
        assert!(!set.bold);
        assert!(!set.strike);
    }

    #[test]
    fn test_from_map_header_levels() {
        assert_eq!(attrs(&json!({"header": 1})).header, Some(Header::H1));
        assert_eq!(attrs(&json!({"header": 2})).header, Some(Header::H2));
        assert_eq!(attrs(&json!({"header": 3})).header, None);
        assert_eq!(attrs(&json!({"header": "1"})).header, None);
    }

    #[test]
    fn test_from_map_dimensions() {
        let set = attrs(&json!({"width": "300px", "height": 200}));
        assert_eq!(set.width.as_deref(), Some("300px"));
        assert_eq!(set.height.as_deref(), Some("200"));
    }

    #[test]
    fn test_from_map_ignores_unknown_keys() {
        let set = attrs(&json!({"color": "#ff0000", "font": "serif"}));
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_map_empty_align_is_unset() {
        assert_eq!(attrs(&json!({"align": ""})).align, None);
        assert_eq!(
            attrs(&json!({"align": "center"})).align.as_deref(),
            Some("center")
        );
    }

    #[test]
    fn test_op_accessors() {
        let op = Op::text("hi").with_attributes(AttributeSet {
            bold: true,
            ..AttributeSet::default()
        });
        assert_eq!(op.as_text(), Some("hi"));
        assert!(op.attributes().bold);
        assert_eq!(Op::image("a.png").as_text(), None);
    }
}

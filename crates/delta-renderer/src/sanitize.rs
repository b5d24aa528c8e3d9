//! Optional HTML escaping pass.
//!
//! Rendering interpolates text, link targets and image attributes
//! literally. When the input is untrusted, run [`escape_document`] on the
//! parsed document first; the rendering stages themselves stay unchanged.

use crate::document::{AttributeSet, Document, Op};

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Return a copy of `document` with every interpolated value escaped.
///
/// Line terminators are untouched, so line segmentation is identical to the
/// unescaped document.
#[must_use]
pub fn escape_document(document: &Document) -> Document {
    document
        .ops()
        .iter()
        .map(|op| match op {
            Op::Text { text, attributes } => Op::Text {
                text: escape_html(text),
                attributes: escape_attributes(attributes),
            },
            Op::Image { source, attributes } => Op::Image {
                source: escape_html(source),
                attributes: escape_attributes(attributes),
            },
        })
        .collect()
}

fn escape_attributes(attrs: &AttributeSet) -> AttributeSet {
    let escape = |value: &Option<String>| value.as_deref().map(escape_html);
    AttributeSet {
        link: escape(&attrs.link),
        align: escape(&attrs.align),
        width: escape(&attrs.width),
        height: escape(&attrs.height),
        ..attrs.clone()
    }
}

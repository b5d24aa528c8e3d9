//! HTML backend for delta rendering.
//!
//! Attribute values, link targets and image sources are interpolated
//! literally. Escaping is a separate pass, see [`crate::sanitize`].

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::document::{AttributeSet, Header};

/// HTML render backend.
///
/// Produces:
/// - `<strong>`, `<em>`, `<u>`, `<s>` and `<a href>` for inline formatting,
///   nested in that order from the inside out
/// - `<p>`, `<h1 class="text-4xl">` or `<h2 class="text-2xl">` per line,
///   inside a `text-align` `<div>` when aligned
/// - Self-closing `<img />` for images
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn inline(text: &str, attrs: &AttributeSet, out: &mut String) {
        if let Some(href) = &attrs.link {
            write!(out, r#"<a href="{href}">"#).unwrap();
        }
        if attrs.strike {
            out.push_str("<s>");
        }
        if attrs.underline {
            out.push_str("<u>");
        }
        if attrs.italic {
            out.push_str("<em>");
        }
        if attrs.bold {
            out.push_str("<strong>");
        }

        out.push_str(text);

        if attrs.bold {
            out.push_str("</strong>");
        }
        if attrs.italic {
            out.push_str("</em>");
        }
        if attrs.underline {
            out.push_str("</u>");
        }
        if attrs.strike {
            out.push_str("</s>");
        }
        if attrs.link.is_some() {
            out.push_str("</a>");
        }
    }

    fn line(content: &str, attrs: &AttributeSet, out: &mut String) {
        if let Some(align) = &attrs.align {
            write!(out, r#"<div style="text-align: {align};">"#).unwrap();
        }

        let (open, close) = match attrs.header {
            Some(Header::H1) => (r#"<h1 class="text-4xl">"#, "</h1>"),
            Some(Header::H2) => (r#"<h2 class="text-2xl">"#, "</h2>"),
            None => ("<p>", "</p>"),
        };
        out.push_str(open);
        out.push_str(content);
        out.push_str(close);

        if attrs.align.is_some() {
            out.push_str("</div>");
        }
    }

    fn image(source: &str, attrs: &AttributeSet, out: &mut String) {
        write!(out, r#"<img src="{source}""#).unwrap();
        if let Some(width) = &attrs.width {
            write!(out, r#" width="{width}""#).unwrap();
        }
        if let Some(height) = &attrs.height {
            write!(out, r#" height="{height}""#).unwrap();
        }
        if let Some(style) = attrs.align.as_deref().and_then(image_align_style) {
            write!(out, r#" style="{style}""#).unwrap();
        }
        out.push_str(" />");
    }
}

/// Inline style for an aligned image. Unknown alignments get no style.
fn image_align_style(align: &str) -> Option<&'static str> {
    match align {
        "center" => Some("display: block; margin: 0 auto;"),
        "left" => Some("display: block; margin: 0 auto 0 0;"),
        _ => None,
    }
}

/// Render a text fragment with its inline attributes applied.
///
/// # Examples
///
/// ```
/// use delta_renderer::{AttributeSet, apply_inline_attributes};
///
/// let attrs = AttributeSet { bold: true, ..AttributeSet::default() };
/// assert_eq!(apply_inline_attributes("hi", &attrs), "<strong>hi</strong>");
/// ```
#[must_use]
pub fn apply_inline_attributes(text: &str, attrs: &AttributeSet) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    HtmlBackend::inline(text, attrs, &mut out);
    out
}

/// Render an image element with its sizing and alignment attributes.
#[must_use]
pub fn apply_image_attributes(source: &str, attrs: &AttributeSet) -> String {
    let mut out = String::with_capacity(source.len() + 64);
    HtmlBackend::image(source, attrs, &mut out);
    out
}

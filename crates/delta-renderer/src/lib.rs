//! Rich-text delta to HTML renderer.
//!
//! A delta document is a flat sequence of insert operations, each optionally
//! carrying formatting attributes. This crate segments that sequence into
//! lines and renders them as block-structured HTML.
//!
//! # Architecture
//!
//! Rendering runs in three stages:
//! - [`parse`]: decodes raw JSON into a typed [`Document`] of [`Op`]s
//! - [`DeltaRenderer`]: folds ops into lines; a line closes on a text op
//!   ending in `\n`, whose attributes govern the whole line
//! - [`RenderBackend`]: produces the markup; [`HtmlBackend`] is the HTML
//!   implementation
//!
//! Text and attribute values are interpolated literally. Enable
//! [`DeltaRenderer::with_html_escaping`] for untrusted input.
//!
//! # Example
//!
//! ```
//! let raw = r#"{"ops":[{"insert":"Hello, "},{"insert":"world!","attributes":{"bold":true}},{"insert":"\n"}]}"#;
//!
//! let html = delta_renderer::render(raw).unwrap();
//! assert_eq!(html, "<p>Hello, <strong>world!</strong></p>\n");
//!
//! let title = delta_renderer::extract_title(raw).unwrap();
//! assert_eq!(title.as_deref(), Some("Hello, "));
//! ```

mod backend;
mod document;
mod error;
mod html;
mod parser;
mod renderer;
pub mod sanitize;
mod title;

pub use backend::RenderBackend;
pub use document::{AttributeSet, Document, Header, Op};
pub use error::DeltaError;
pub use html::{HtmlBackend, apply_image_attributes, apply_inline_attributes};
pub use parser::parse;
pub use renderer::{DeltaRenderer, ImagePolicy, RenderResult};
pub use title::TitlePolicy;

/// Render a serialized delta document to HTML with default settings.
///
/// # Errors
///
/// Returns [`DeltaError::MalformedDocument`] if the input cannot be decoded.
pub fn render(raw: &str) -> Result<String, DeltaError> {
    DeltaRenderer::<HtmlBackend>::new()
        .render_str(raw)
        .map(|result| result.html)
}

/// Extract the title of a serialized delta document.
///
/// Returns the literal text of the first text insert, skipping leading
/// images, or `None` if the document has no text.
///
/// # Errors
///
/// Returns [`DeltaError::MalformedDocument`] if the input cannot be decoded.
pub fn extract_title(raw: &str) -> Result<Option<String>, DeltaError> {
    let document = parse(raw)?;
    Ok(title::extract(&document, TitlePolicy::default()).map(str::to_owned))
}

/// Extract a title from a parsed document using the given policy.
#[must_use]
pub fn document_title(document: &Document, policy: TitlePolicy) -> Option<&str> {
    title::extract(document, policy)
}

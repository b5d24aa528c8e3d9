//! Render backend trait for format-specific markup.
//!
//! The line accumulator decides *when* fragments, lines and images are
//! emitted; a backend decides *how* they look.

use crate::document::AttributeSet;

/// Backend trait for format-specific rendering operations.
///
/// Implementations provide markup for:
/// - Inline formatting of a text fragment (bold, italic, underline, strike, link)
/// - The block wrapper of a completed line (paragraph, heading, alignment)
/// - Standalone image blocks
pub trait RenderBackend {
    /// Render `text` with its inline attributes applied.
    ///
    /// # Arguments
    ///
    /// * `text` - Fragment text, interpolated as-is
    /// * `attrs` - Attributes of the op the fragment came from
    /// * `out` - Output buffer to write to
    fn inline(text: &str, attrs: &AttributeSet, out: &mut String);

    /// Wrap a completed line in its block element.
    ///
    /// `content` has already been passed through [`inline`](Self::inline);
    /// only block-level attributes (header, align) are applied here.
    fn line(content: &str, attrs: &AttributeSet, out: &mut String);

    /// Render an image block.
    fn image(source: &str, attrs: &AttributeSet, out: &mut String);
}

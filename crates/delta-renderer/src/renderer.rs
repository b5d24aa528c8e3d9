//! Line-accumulating delta renderer with pluggable backend.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::backend::RenderBackend;
use crate::document::{AttributeSet, Document, Op};
use crate::error::DeltaError;
use crate::sanitize::escape_document;
use crate::title::{self, TitlePolicy};

/// Result of rendering a delta document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    /// Rendered markup, one block per line.
    pub html: String,
    /// Title extracted from the first content op (if title extraction was enabled).
    pub title: Option<String>,
    /// Warnings generated during rendering (e.g., a dropped trailing line).
    pub warnings: Vec<String>,
}

/// What happens to an open line when an image op arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImagePolicy {
    /// Emit the image and keep accumulating the open line after it.
    ///
    /// The open line's text ends up rendered *after* the image, once a later
    /// op terminates it.
    #[default]
    KeepLineOpen,
    /// Close a non-empty open line as a plain paragraph before the image.
    FlushLine,
}

/// Delta renderer with pluggable backend.
///
/// Uses the [`RenderBackend`] trait to produce markup while the renderer
/// handles line segmentation.
///
/// # Example
///
/// ```
/// use delta_renderer::{DeltaRenderer, HtmlBackend};
///
/// let raw = r#"{"ops":[{"insert":"Hello"},{"insert":"\n","attributes":{"header":1}}]}"#;
/// let result = DeltaRenderer::<HtmlBackend>::new()
///     .with_title_extraction()
///     .render_str(raw)
///     .unwrap();
/// assert_eq!(result.html, "<h1 class=\"text-4xl\">Hello</h1>\n");
/// assert_eq!(result.title.as_deref(), Some("Hello"));
/// ```
pub struct DeltaRenderer<B: RenderBackend> {
    image_policy: ImagePolicy,
    title_policy: Option<TitlePolicy>,
    escape_html: bool,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> Default for DeltaRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: RenderBackend> DeltaRenderer<B> {
    /// Create a renderer with default policies and no title extraction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            image_policy: ImagePolicy::default(),
            title_policy: None,
            escape_html: false,
            _backend: PhantomData,
        }
    }

    /// Set how open lines are treated when an image op arrives.
    #[must_use]
    pub fn with_image_policy(mut self, policy: ImagePolicy) -> Self {
        self.image_policy = policy;
        self
    }

    /// Enable title extraction with the default [`TitlePolicy`].
    #[must_use]
    pub fn with_title_extraction(self) -> Self {
        self.with_title_policy(TitlePolicy::default())
    }

    /// Enable title extraction with the given policy.
    #[must_use]
    pub fn with_title_policy(mut self, policy: TitlePolicy) -> Self {
        self.title_policy = Some(policy);
        self
    }

    /// Enable or disable HTML escaping of text and attribute values.
    ///
    /// Disabled by default: values are interpolated literally.
    #[must_use]
    pub fn with_html_escaping(mut self, enabled: bool) -> Self {
        self.escape_html = enabled;
        self
    }

    /// Parse and render a serialized delta document.
    ///
    /// # Errors
    ///
    /// Returns [`DeltaError::MalformedDocument`] if the input cannot be decoded.
    /// No partial output is produced.
    pub fn render_str(&self, raw: &str) -> Result<RenderResult, DeltaError> {
        Ok(self.render(&Document::parse(raw)?))
    }

    /// Render a parsed document.
    pub fn render(&self, document: &Document) -> RenderResult {
        if self.escape_html {
            self.render_document(&escape_document(document))
        } else {
            self.render_document(document)
        }
    }

    fn render_document(&self, document: &Document) -> RenderResult {
        let mut lines = LineAccumulator::<B>::new(self.image_policy);
        for op in document.ops() {
            lines.push(op);
        }

        let line_count = lines.line_count;
        let (html, dropped) = lines.finish();
        let warnings = dropped
            .map(|len| format!("Dropped unterminated trailing line ({len} bytes)"))
            .into_iter()
            .collect();
        tracing::debug!(
            ops = document.len(),
            lines = line_count,
            html_len = html.len(),
            "Rendered delta document"
        );

        RenderResult {
            html,
            title: self
                .title_policy
                .and_then(|policy| title::extract(document, policy))
                .map(str::to_owned),
            warnings,
        }
    }
}

/// Fold state for grouping inline fragments into lines.
///
/// Lives for a single render call.
struct LineAccumulator<B: RenderBackend> {
    /// Inline markup of the currently open line.
    line: String,
    /// Completed markup, append-only.
    output: String,
    line_count: usize,
    image_policy: ImagePolicy,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> LineAccumulator<B> {
    fn new(image_policy: ImagePolicy) -> Self {
        Self {
            line: String::new(),
            output: String::with_capacity(4096),
            line_count: 0,
            image_policy,
            _backend: PhantomData,
        }
    }

    fn push(&mut self, op: &Op) {
        match op {
            Op::Text { text, attributes } => self.push_text(text, attributes),
            Op::Image { source, attributes } => self.push_image(source, attributes),
        }
    }

    fn push_text(&mut self, text: &str, attrs: &AttributeSet) {
        if text.ends_with('\n') {
            // Attributes of the terminating op govern the whole line.
            self.line.push_str(text);
            self.close_line(attrs);
        } else {
            B::inline(text, attrs, &mut self.line);
        }
    }

    fn push_image(&mut self, source: &str, attrs: &AttributeSet) {
        if self.image_policy == ImagePolicy::FlushLine && !self.line.is_empty() {
            self.close_line(&AttributeSet::default());
        }
        B::image(source, attrs, &mut self.output);
        self.output.push('\n');
    }

    fn close_line(&mut self, attrs: &AttributeSet) {
        let content = self.line.strip_suffix('\n').unwrap_or(&self.line);
        let mut inline = String::with_capacity(content.len() + 32);
        B::inline(content, attrs, &mut inline);
        B::line(&inline, attrs, &mut self.output);
        self.output.push('\n');
        self.line.clear();
        self.line_count += 1;
    }

    /// Return the completed markup and the length of a dropped trailing line.
    ///
    /// Only terminated lines produce output; an unterminated trailing line is
    /// discarded.
    fn finish(self) -> (String, Option<usize>) {
        if self.line.is_empty() {
            return (self.output, None);
        }
        tracing::debug!(len = self.line.len(), "Dropping unterminated trailing line");
        (self.output, Some(self.line.len()))
    }
}

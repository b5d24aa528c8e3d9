//! Title extraction from the first content op.

use serde::{Deserialize, Serialize};

use crate::document::{Document, Op};

/// How a title is chosen when the document starts with an image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitlePolicy {
    /// Skip leading images and use the first text insert.
    #[default]
    FirstText,
    /// Use the first op only; no title if it is an image.
    FirstOp,
}

/// Return the literal text of the first op selected by `policy`.
///
/// The text is returned untouched: no trimming, attribute stripping or
/// newline handling.
#[must_use]
pub fn extract(document: &Document, policy: TitlePolicy) -> Option<&str> {
    match policy {
        TitlePolicy::FirstText => document.ops().iter().find_map(Op::as_text),
        TitlePolicy::FirstOp => document.ops().first().and_then(Op::as_text),
    }
}

//! Error types for delta rendering.

/// Delta rendering error.
#[derive(Debug, thiserror::Error)]
pub enum DeltaError {
    /// The raw input could not be decoded into an operation sequence.
    #[error("Malformed delta document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}

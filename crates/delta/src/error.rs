//! CLI error types.

use delta_config::ConfigError;
use delta_renderer::DeltaError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Delta(#[from] DeltaError),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

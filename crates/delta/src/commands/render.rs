//! `delta render` command implementation.

use std::path::PathBuf;

use clap::Args;
use delta_config::{CliSettings, Config};
use delta_renderer::{HtmlBackend, ImagePolicy, RenderResult};

use super::read_input;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Delta document to render (default: stdin).
    input: Option<PathBuf>,

    /// Emit `{"title", "html", "warnings"}` as JSON instead of bare HTML.
    #[arg(long)]
    json: bool,

    /// HTML-escape text, links and image attributes (overrides config).
    #[arg(long)]
    escape: bool,

    /// Close an open line before each image (overrides config).
    #[arg(long)]
    flush_images: bool,

    /// Path to configuration file (default: auto-discover delta.toml).
    #[arg(short, long, env = "DELTA_CONFIG")]
    config: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            image_policy: self.flush_images.then_some(ImagePolicy::FlushLine),
            escape_html: self.escape.then_some(true),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Loaded configuration");
        }

        let raw = read_input(self.input.as_deref())?;
        let result = config.render.renderer::<HtmlBackend>().render_str(&raw)?;

        for warning in &result.warnings {
            output.warning(&format!("Warning: {warning}"));
        }

        if self.json {
            output.line(&to_json(&result)?)?;
        } else {
            output.document(&result.html)?;
        }
        Ok(())
    }
}

fn to_json(result: &RenderResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

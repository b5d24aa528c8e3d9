//! `delta title` command implementation.

use std::path::PathBuf;

use clap::Args;
use delta_config::{CliSettings, Config, RenderConfig};
use delta_renderer::{Document, sanitize};

use super::{TitlePolicyArg, read_input};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the title command.
#[derive(Args)]
pub(crate) struct TitleArgs {
    /// Delta document to read (default: stdin).
    input: Option<PathBuf>,

    /// How to pick the title when the document starts with an image (overrides config).
    #[arg(long, value_enum)]
    title_policy: Option<TitlePolicyArg>,

    /// HTML-escape the title (overrides config).
    #[arg(long)]
    escape: bool,

    /// Path to configuration file (default: auto-discover delta.toml).
    #[arg(short, long, env = "DELTA_CONFIG")]
    config: Option<PathBuf>,
}

impl TitleArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            title_policy: self.title_policy.map(Into::into),
            escape_html: self.escape.then_some(true),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let raw = read_input(self.input.as_deref())?;
        match title_of(&raw, &config.render)? {
            Some(title) if title.ends_with('\n') => output.document(&title)?,
            Some(title) => output.line(&title)?,
            None => tracing::debug!("Document has no title"),
        }
        Ok(())
    }
}

/// Extract the title the same way `delta render --json` reports it.
fn title_of(raw: &str, render: &RenderConfig) -> Result<Option<String>, CliError> {
    let mut document = Document::parse(raw)?;
    if render.escape_html {
        document = sanitize::escape_document(&document);
    }
    Ok(delta_renderer::document_title(&document, render.title_policy).map(str::to_owned))
}

//! CLI command implementations.

mod render;
mod title;

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use delta_renderer::TitlePolicy;

pub(crate) use render::RenderArgs;
pub(crate) use title::TitleArgs;

/// Title selection policy as accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum TitlePolicyArg {
    /// Skip leading images and use the first text insert.
    FirstText,
    /// Use the first op only; no title if it is an image.
    FirstOp,
}

impl From<TitlePolicyArg> for TitlePolicy {
    fn from(arg: TitlePolicyArg) -> Self {
        match arg {
            TitlePolicyArg::FirstText => Self::FirstText,
            TitlePolicyArg::FirstOp => Self::FirstOp,
        }
    }
}

/// Read a raw delta document from `path`, or from stdin when absent or `-`.
fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

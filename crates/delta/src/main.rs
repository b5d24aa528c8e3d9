//! Delta CLI - rich-text delta document renderer.
//!
//! Provides commands for:
//! - `render`: Render a delta document to HTML
//! - `title`: Print the title of a delta document

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, TitleArgs};
use output::Output;

/// Delta - rich-text delta document renderer.
#[derive(Parser)]
#[command(name = "delta", version, about)]
struct Cli {
    /// Enable debug logging (otherwise RUST_LOG applies).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a delta document to HTML.
    Render(RenderArgs),
    /// Print the title of a delta document.
    Title(TitleArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Title(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

//! Terminal output utilities.
//!
//! Rendered documents go to stdout; diagnostics go to stderr in color.

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    out: Term,
    err: Term,
    yellow: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Write document content to stdout as-is.
    pub(crate) fn document(&self, content: &str) -> std::io::Result<()> {
        self.out.write_str(content)?;
        self.out.flush()
    }

    /// Print a single line to stdout.
    pub(crate) fn line(&self, content: &str) -> std::io::Result<()> {
        self.out.write_line(content)
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.err.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }
}

//! Colored terminal output utilities.

use std::io::Write;

use console::{Style, Term};
use serde::Serialize;

use crate::error::CliError;

/// Terminal output formatter.
///
/// Messages go to stderr; machine-readable JSON goes to stdout.
pub(crate) struct Output {
    term: Term,
    stdout: Term,
    green: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            stdout: Term::stdout(),
            green: Style::new().green(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a highlighted message (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        let _ = self
            .term
            .write_line(&self.cyan_bold.apply_to(msg).to_string());
    }

    /// Print a value as pretty JSON on stdout.
    ///
    /// The JSON is the command's result, so write failures are returned.
    pub(crate) fn json<T: Serialize>(&self, value: &T) -> Result<(), CliError> {
        write_json(&self.stdout, value)
    }
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    writeln!(writer, "{rendered}")?;
    writer.flush()?;
    Ok(())
}

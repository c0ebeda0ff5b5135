//! Real terminal output.

use std::io::Write;

use console::{style, Term};

use super::UserInterface;

/// Terminal-backed UI. Errors are styled when the terminal supports it;
/// `console` honors `NO_COLOR` on its own.
pub struct TerminalUI {
    stdout: Term,
    stderr: Term,
}

impl TerminalUI {
    /// Create a terminal UI over stdout/stderr.
    pub fn new() -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.stdout, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.stderr, "{}", style(msg).red()).ok();
    }
}

//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! The report itself goes to standard output; diagnostics and errors go
//! to standard error so machine consumers of `--json` stay unbothered.

pub mod mock;
pub mod terminal;

pub use mock::MockUI;
pub use terminal::TerminalUI;

/// Trait for user-facing output.
///
/// This trait allows capturing the rendered report in tests.
pub trait UserInterface {
    /// Write report output to standard output.
    fn message(&mut self, msg: &str);

    /// Write an error to standard error.
    fn error(&mut self, msg: &str);
}

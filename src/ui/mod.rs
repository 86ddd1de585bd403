//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for writing to the terminal
//! - [`MockUI`] for capturing output in tests
//! - [`Table`] for box-drawn listings
//!
//! # Example
//!
//! ```
//! use agentrig::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("python-api");
//! ui.success("Done");
//!
//! assert_eq!(ui.messages(), ["python-api"]);
//! assert_eq!(ui.successes(), ["Done"]);
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, AgentrigTheme};

/// Trait for user-facing output.
///
/// Command results (tables, documents) go through [`message`](Self::message)
/// and are shown in every mode. This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Set the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// The theme used to style output.
    fn theme(&self) -> &AgentrigTheme;

    /// Display command output.
    fn message(&mut self, msg: &str);

    /// Display a detail line (verbose mode only).
    fn detail(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}

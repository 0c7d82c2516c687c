//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - Status icons, themes, spinners, and tables
//!
//! # Example
//!
//! ```
//! use botcheck::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_section("Checking required files...");
//! ui.show_status(StatusKind::Success, "Found: bot.py");
//! assert!(ui.has_status(StatusKind::Success, "bot.py"));
//! ```

pub mod icons;
pub mod mock;
pub mod output;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{MockSpinner, MockUI};
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, BotcheckTheme};

/// Width of the rules framing the banner and summary.
pub const RULE_WIDTH: usize = 60;

/// Trait for user interface interactions.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show the report banner.
    fn show_header(&mut self, title: &str);

    /// Show a section title (one per check).
    fn show_section(&mut self, title: &str);

    /// Show an indented status line inside a section.
    fn show_status(&mut self, status: StatusKind, msg: &str);

    /// Show a horizontal rule.
    fn show_rule(&mut self);

    /// Show a follow-up hint (e.g. the command to run next).
    fn show_hint(&mut self, hint: &str);

    /// Start a transient spinner for a slow operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Remove the spinner from the screen.
    fn finish(&mut self);
}

//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, BotcheckTheme, OutputMode, ProgressSpinner, SpinnerHandle, StatusKind,
    UserInterface, RULE_WIDTH,
};

/// Terminal UI implementation.
///
/// Report output goes to stdout; errors and spinners go to stderr so that
/// `--json` output stays machine-readable.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: BotcheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI, picking colors from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            BotcheckTheme::new()
        } else {
            BotcheckTheme::plain()
        };
        Self::with_theme(mode, theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: BotcheckTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_header(title, RULE_WIDTH)).ok();
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "\n{}", self.theme.format_section(title)).ok();
        }
    }

    fn show_status(&mut self, status: StatusKind, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "   {}", status.format(&self.theme, msg)).ok();
        }
    }

    fn show_rule(&mut self) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_rule(RULE_WIDTH)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(
                self.out,
                "\n{} {}",
                self.theme.info.apply_to("→"),
                self.theme.command.apply_to(hint)
            )
            .ok();
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() && self.err.is_term() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}

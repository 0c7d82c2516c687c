//! Visual theme and styling.

use console::Style;

/// botcheck's visual theme.
#[derive(Debug, Clone)]
pub struct BotcheckTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational elements (cyan).
    pub info: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for section titles (bold).
    pub section: Style,
    /// Style for rules and borders (dim).
    pub border: Style,
    /// Style for commands shown in guidance (bold).
    pub command: Style,
}

impl Default for BotcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl BotcheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            header: Style::new().bold().cyan(),
            section: Style::new().bold(),
            border: Style::new().dim(),
            command: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            header: Style::new(),
            section: Style::new(),
            border: Style::new(),
            command: Style::new(),
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a horizontal rule.
    pub fn format_rule(&self, width: usize) -> String {
        self.border.apply_to("=".repeat(width)).to_string()
    }

    /// Format a header banner framed by rules.
    pub fn format_header(&self, title: &str, width: usize) -> String {
        format!(
            "{}\n{}\n{}",
            self.format_rule(width),
            self.header.apply_to(title),
            self.format_rule(width)
        )
    }

    /// Format a section title.
    pub fn format_section(&self, title: &str) -> String {
        self.section.apply_to(title).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

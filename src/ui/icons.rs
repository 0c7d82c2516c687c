//! Status vocabulary for check output.
//!
//! `StatusKind` is the single set of icons and colors used for detail
//! lines and summary rows.

use crate::checks::DetailKind;

use super::theme::BotcheckTheme;

/// Canonical status kinds used across botcheck output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Item present or check passed.
    Success,
    /// Item missing or check failed.
    Failed,
    /// Non-fatal warning.
    Warning,
    /// Guidance.
    Info,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
            Self::Info => "›",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &BotcheckTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Info => theme.info.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &BotcheckTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Status for a pass/fail outcome.
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Self::Success
        } else {
            Self::Failed
        }
    }
}

impl From<DetailKind> for StatusKind {
    fn from(kind: DetailKind) -> Self {
        match kind {
            DetailKind::Found | DetailKind::Created => Self::Success,
            DetailKind::Missing => Self::Failed,
            DetailKind::Warning => Self::Warning,
            DetailKind::Info => Self::Info,
        }
    }
}

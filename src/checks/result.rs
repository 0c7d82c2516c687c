//! Check result types.
//!
//! Each check produces exactly one [`CheckResult`]. Its `passed` flag is the
//! only thing that feeds the overall verdict; the details exist so the
//! report can say what was found, missing or created.

use serde::Serialize;

/// What a single report line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailKind {
    /// An expected item is present.
    Found,
    /// An expected item is absent.
    Missing,
    /// A missing item was created by the check.
    Created,
    /// Something worth attention that does not fail the check.
    Warning,
    /// Guidance text.
    Info,
}

/// One line of check output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckDetail {
    /// The kind of line
    pub kind: DetailKind,
    /// Human-readable text
    pub message: String,
}

impl CheckDetail {
    /// Create a detail line.
    pub fn new(kind: DetailKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a [`DetailKind::Found`] line.
    pub fn found(message: impl Into<String>) -> Self {
        Self::new(DetailKind::Found, message)
    }

    /// Shorthand for a [`DetailKind::Missing`] line.
    pub fn missing(message: impl Into<String>) -> Self {
        Self::new(DetailKind::Missing, message)
    }

    /// Shorthand for a [`DetailKind::Created`] line.
    pub fn created(message: impl Into<String>) -> Self {
        Self::new(DetailKind::Created, message)
    }

    /// Shorthand for a [`DetailKind::Warning`] line.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DetailKind::Warning, message)
    }

    /// Shorthand for a [`DetailKind::Info`] line.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DetailKind::Info, message)
    }
}

/// The outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    name: String,
    passed: bool,
    details: Vec<CheckDetail>,
}

impl CheckResult {
    /// Create a result.
    pub fn new(name: impl Into<String>, passed: bool, details: Vec<CheckDetail>) -> Self {
        Self {
            name: name.into(),
            passed,
            details,
        }
    }

    /// Display name of the check.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Report lines, in the order they were produced.
    pub fn details(&self) -> &[CheckDetail] {
        &self.details
    }

    /// `PASS` or `FAIL`.
    pub fn status_label(&self) -> &'static str {
        if self.passed {
            "PASS"
        } else {
            "FAIL"
        }
    }

    /// Details of the given kind.
    pub fn details_of(&self, kind: DetailKind) -> impl Iterator<Item = &CheckDetail> {
        self.details.iter().filter(move |d| d.kind == kind)
    }

    /// Whether any detail of the given kind contains `text`.
    pub fn has_detail(&self, kind: DetailKind, text: &str) -> bool {
        self.details_of(kind).any(|d| d.message.contains(text))
    }
}

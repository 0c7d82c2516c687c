//! The ordered list of checks run by the validator.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The checks botcheck knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Env file exists and mentions every required key.
    EnvFile,
    /// Top-level files exist.
    RequiredFiles,
    /// Command folder and its modules exist.
    CommandModules,
    /// Data folder exists (created when absent).
    DataFolder,
    /// Python packages can be imported.
    Dependencies,
}

impl CheckKind {
    /// Every check, in report order.
    pub const ALL: [CheckKind; 5] = [
        CheckKind::EnvFile,
        CheckKind::RequiredFiles,
        CheckKind::CommandModules,
        CheckKind::DataFolder,
        CheckKind::Dependencies,
    ];

    /// Short identifier used by `--only`.
    pub fn id(self) -> &'static str {
        match self {
            Self::EnvFile => "env",
            Self::RequiredFiles => "files",
            Self::CommandModules => "commands",
            Self::DataFolder => "data",
            Self::Dependencies => "deps",
        }
    }

    /// Name shown in the summary.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::EnvFile => "Environment File",
            Self::RequiredFiles => "Required Files",
            Self::CommandModules => "Commands Modules",
            Self::DataFolder => "Data Folder",
            Self::Dependencies => "Dependencies",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == wanted)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|k| k.id()).collect();
                format!("unknown check '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Ordered checks for one run. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRegistry {
    checks: Vec<CheckKind>,
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self {
            checks: CheckKind::ALL.to_vec(),
        }
    }
}

impl CheckRegistry {
    /// Registry with every check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry restricted to `selected`, keeping report order.
    pub fn only(selected: &[CheckKind]) -> Self {
        Self {
            checks: CheckKind::ALL
                .into_iter()
                .filter(|kind| selected.contains(kind))
                .collect(),
        }
    }

    /// Parse `--only` values into a registry. Empty input selects every check.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self, String> {
        if ids.is_empty() {
            return Ok(Self::default());
        }
        let selected = ids
            .iter()
            .map(|id| id.as_ref().parse())
            .collect::<Result<Vec<CheckKind>, _>>()?;
        Ok(Self::only(&selected))
    }

    /// Checks in run order.
    pub fn iter(&self) -> impl Iterator<Item = CheckKind> + '_ {
        self.checks.iter().copied()
    }

    /// Number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no checks are registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

//! The individual pre-flight checks.
//!
//! Every check takes a [`CheckContext`] and returns one [`CheckResult`].
//! Checks never depend on each other's outcome. Missing items are recorded
//! in the result; only conditions the tool cannot recover from come back
//! as errors.
//!
//! - [`env_file`] - env file present and mentions every required key
//! - [`files`] - generic "all of these exist" scan, used for the required
//!   files and the command modules
//! - [`data_dir`] - data folder present, created when absent
//! - [`dependencies`] - Python packages importable
//! - [`registry`] - ordered list of checks for a run
//! - [`result`] - result and detail types

pub mod data_dir;
pub mod dependencies;
pub mod env_file;
pub mod files;
pub mod registry;
pub mod result;

pub use data_dir::check_data_dir;
pub use dependencies::check_dependencies;
pub use env_file::{check_env_file, missing_keys};
pub use files::{check_all_exist, check_command_modules, check_required_files, ExistenceScan};
pub use registry::{CheckKind, CheckRegistry};
pub use result::{CheckDetail, CheckResult, DetailKind};

use std::path::Path;

use crate::config::Checklist;

/// Inputs shared by every check.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// Directory all checklist paths are relative to
    pub project_root: &'a Path,
    /// What to look for
    pub checklist: &'a Checklist,
}

impl<'a> CheckContext<'a> {
    /// Create a context.
    pub fn new(project_root: &'a Path, checklist: &'a Checklist) -> Self {
        Self {
            project_root,
            checklist,
        }
    }

    /// Resolve a checklist path against the project root.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> std::path::PathBuf {
        self.project_root.join(relative)
    }
}

/// Render a relative path for report lines, always with `/` separators.
pub(crate) fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

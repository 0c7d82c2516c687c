//! Checklist file discovery and loading.
//!
//! The checklist is optional. When no file is found under the project root
//! the built-in [`Checklist::default`] is used.

use crate::config::schema::Checklist;
use crate::config::validator::validate;
use crate::error::{BotcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names searched for in the project root, in priority order.
pub const CHECKLIST_FILE_NAMES: &[&str] = &[".botcheck.yml", ".botcheck.yaml"];

/// Find the checklist file for a project root.
pub fn find_checklist_file(project_root: &Path) -> Option<PathBuf> {
    CHECKLIST_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load a single checklist file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigRead` if it exists but can't be read.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_checklist_file(path: &Path) -> Result<Checklist> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BotcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BotcheckError::ConfigRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    parse_checklist(&content, path)
}

/// Parse YAML content into a Checklist.
///
/// A blank document yields the default checklist.
pub fn parse_checklist(content: &str, source_path: &Path) -> Result<Checklist> {
    if content.trim().is_empty() {
        return Ok(Checklist::default());
    }

    serde_yaml::from_str(content).map_err(|e| BotcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate the checklist for a project.
///
/// If `config_override` is provided that file must exist. Otherwise the
/// project root is searched for a checklist file and the defaults are used
/// when none is present.
pub fn load_checklist(project_root: &Path, config_override: Option<&Path>) -> Result<Checklist> {
    let path = match config_override {
        Some(path) => Some(path.to_path_buf()),
        None => find_checklist_file(project_root),
    };

    let checklist = match path {
        Some(path) => {
            tracing::debug!("Loading checklist from {}", path.display());
            load_checklist_file(&path)?
        }
        None => {
            tracing::debug!("No checklist file found, using built-in defaults");
            Checklist::default()
        }
    };

    validate(&checklist)?;
    Ok(checklist)
}

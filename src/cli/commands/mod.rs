//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`botcheck check`, `botcheck list`)
//! - Shared checklist loading
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::path::Path;

use crate::config::{load_checklist, Checklist};
use crate::error::{BotcheckError, Result};
use crate::ui::UserInterface;

/// Exit code for checklist problems.
pub const CONFIG_ERROR_EXIT: i32 = 2;

/// Load the checklist, reporting configuration problems through `ui`.
///
/// Returns `Ok(None)` after printing the error when the checklist is
/// missing, malformed or invalid; callers map that to
/// [`CONFIG_ERROR_EXIT`].
pub(crate) fn load_or_report(
    project_root: &Path,
    config: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<Option<Checklist>> {
    match load_checklist(project_root, config) {
        Ok(checklist) => Ok(Some(checklist)),
        Err(e) if e.is_config_error() => {
            ui.error(&e.to_string());
            if let BotcheckError::ConfigValidationError { .. } = e {
                ui.show_hint("Fix the checklist file and run botcheck again");
            }
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

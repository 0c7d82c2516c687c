//! Check command implementation.
//!
//! The `botcheck check` command runs the pre-flight checks and prints the
//! report. It is also what runs when no subcommand is given.

use std::path::{Path, PathBuf};

use crate::checks::CheckRegistry;
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::{OutputMode, UserInterface};
use crate::validator::Validator;

use super::dispatcher::{Command, CommandResult};
use super::{load_or_report, CONFIG_ERROR_EXIT};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = match CheckRegistry::from_ids(&self.args.only) {
            Ok(registry) => registry,
            Err(message) => {
                ui.error(&message);
                return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
            }
        };

        let Some(checklist) = load_or_report(&self.project_root, self.config.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };

        let validator = Validator::new(&self.project_root, checklist).with_registry(registry);

        let report = if self.args.json {
            let previous = ui.output_mode();
            ui.set_output_mode(OutputMode::Silent);
            let report = validator.run_all_checks(ui);
            ui.set_output_mode(previous);
            let report = report?;
            ui.message(&report.to_json()?);
            report
        } else {
            validator.run_all_checks(ui)?
        };

        if report.passed() || !self.args.strict {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

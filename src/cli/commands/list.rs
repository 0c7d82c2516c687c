//! List command implementation.
//!
//! The `botcheck list` command shows the checks and what each one looks
//! for, or dumps the resolved checklist as JSON or YAML.

use std::path::{Path, PathBuf};

use crate::checks::{display_path, CheckKind};
use crate::cli::args::ListArgs;
use crate::config::Checklist;
use crate::error::{BotcheckError, Result};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::{load_or_report, CONFIG_ERROR_EXIT};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: ListArgs) -> Self {
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
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

/// One-line description of what a check looks for.
pub fn describe_targets(kind: CheckKind, checklist: &Checklist) -> String {
    match kind {
        CheckKind::EnvFile => format!(
            "{} ({})",
            display_path(&checklist.env_file.path),
            checklist.env_file.required_keys.join(", ")
        ),
        CheckKind::RequiredFiles => checklist.required_files.join(", "),
        CheckKind::CommandModules => {
            let count = checklist.commands.modules.len();
            format!(
                "{}/ ({} module{})",
                display_path(&checklist.commands.dir),
                count,
                if count == 1 { "" } else { "s" }
            )
        }
        CheckKind::DataFolder => {
            format!("{}/ (created if missing)", display_path(&checklist.data_dir))
        }
        CheckKind::Dependencies => {
            let names: Vec<_> = checklist
                .dependencies
                .packages
                .iter()
                .map(|p| p.display_name())
                .collect();
            format!(
                "{} via {}",
                names.join(", "),
                checklist.dependencies.interpreter
            )
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(checklist) = load_or_report(&self.project_root, self.config.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&checklist)
                .map_err(|e| BotcheckError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if self.args.yaml {
            let yaml =
                serde_yaml::to_string(&checklist).map_err(|e| BotcheckError::Other(e.into()))?;
            ui.message(yaml.trim_end());
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["Id", "Check", "Looks for"]);
        for kind in CheckKind::ALL {
            table.add_row(&[
                kind.id().to_string(),
                kind.display_name().to_string(),
                describe_targets(kind, &checklist),
            ]);
        }
        ui.message(&table.render());

        Ok(CommandResult::success())
    }
}

//! Existence checks for required files and command modules.
//!
//! Both checks are the same scan over a list of names; only the base
//! directory and the label prefix differ.

use std::path::Path;

use super::registry::CheckKind;
use super::result::{CheckDetail, CheckResult};
use super::{display_path, CheckContext};

/// Outcome of scanning a list of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistenceScan {
    /// Whether every name exists
    pub all_exist: bool,
    /// One `Found`/`Missing` line per name, in list order
    pub details: Vec<CheckDetail>,
}

/// Check that every name exists under `base`.
///
/// Every entry is evaluated, even after one is found missing. `label_prefix`
/// is prepended to names in "Missing" lines (e.g. `commands`); "Found" lines
/// show the bare name.
pub fn check_all_exist<S: AsRef<str>>(
    base: &Path,
    names: &[S],
    label_prefix: Option<&str>,
) -> ExistenceScan {
    let mut all_exist = true;
    let mut details = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref();

        if base.join(name).exists() {
            details.push(CheckDetail::found(format!("Found: {}", name)));
        } else {
            let label = match label_prefix {
                Some(prefix) => format!("{}/{}", prefix, name),
                None => name.to_string(),
            };
            tracing::debug!("Missing {}", base.join(name).display());
            details.push(CheckDetail::missing(format!("Missing: {}", label)));
            all_exist = false;
        }
    }

    ExistenceScan { all_exist, details }
}

/// Check that every required top-level file exists.
pub fn check_required_files(ctx: &CheckContext<'_>) -> CheckResult {
    let scan = check_all_exist(ctx.project_root, &ctx.checklist.required_files, None);
    CheckResult::new(
        CheckKind::RequiredFiles.display_name(),
        scan.all_exist,
        scan.details,
    )
}

/// Check that the command folder exists and holds every expected module.
///
/// A missing folder fails immediately without scanning the modules.
pub fn check_command_modules(ctx: &CheckContext<'_>) -> CheckResult {
    let name = CheckKind::CommandModules.display_name();
    let commands = &ctx.checklist.commands;
    let dir = ctx.resolve(&commands.dir);
    let label = display_path(&commands.dir);

    if !dir.exists() {
        return CheckResult::new(
            name,
            false,
            vec![CheckDetail::missing(format!("{}/ folder not found!", label))],
        );
    }

    let scan = check_all_exist(&dir, &commands.modules, Some(&label));
    CheckResult::new(name, scan.all_exist, scan.details)
}

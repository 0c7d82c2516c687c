//! Data folder check.
//!
//! This is the only check with a side effect: a missing data folder is
//! created and the check still passes.

use std::fs;

use crate::error::{BotcheckError, Result};

use super::registry::CheckKind;
use super::result::{CheckDetail, CheckResult};
use super::{display_path, CheckContext};

/// Check that the data folder exists, creating it when absent.
///
/// # Errors
///
/// Returns `DataDirCreate` if the folder is missing and cannot be created.
pub fn check_data_dir(ctx: &CheckContext<'_>) -> Result<CheckResult> {
    let name = CheckKind::DataFolder.display_name();
    let path = ctx.resolve(&ctx.checklist.data_dir);
    let label = display_path(&ctx.checklist.data_dir);

    if path.exists() {
        return Ok(CheckResult::new(
            name,
            true,
            vec![CheckDetail::found(format!("{}/ folder exists", label))],
        ));
    }

    tracing::debug!("Creating data folder {}", path.display());
    fs::create_dir_all(&path).map_err(|source| BotcheckError::DataDirCreate {
        path: path.clone(),
        source,
    })?;

    Ok(CheckResult::new(
        name,
        true,
        vec![
            CheckDetail::warning(format!("{}/ folder not found, creating...", label)),
            CheckDetail::created(format!("Created {}/ folder", label)),
        ],
    ))
}

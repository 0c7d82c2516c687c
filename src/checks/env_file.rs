//! Environment file check.
//!
//! A key counts as present when its name appears anywhere in the file text,
//! including inside a comment or inside a longer key name. Keys that only
//! match that way are reported as warnings, never as failures.

use std::fs;

use crate::config::{EnvAssignments, EnvFileConfig};
use crate::error::{BotcheckError, Result};

use super::registry::CheckKind;
use super::result::{CheckDetail, CheckResult};
use super::{display_path, CheckContext};

/// Required keys that do not occur anywhere in `content`, in list order.
pub fn missing_keys<'k>(content: &str, required: &'k [String]) -> Vec<&'k str> {
    required
        .iter()
        .map(String::as_str)
        .filter(|key| !content.contains(key))
        .collect()
}

/// Check that the env file exists and mentions every required key.
///
/// # Errors
///
/// Returns `EnvFileRead` if the file exists but cannot be read.
pub fn check_env_file(ctx: &CheckContext<'_>) -> Result<CheckResult> {
    let name = CheckKind::EnvFile.display_name();
    let env = &ctx.checklist.env_file;
    let path = ctx.resolve(&env.path);
    let label = display_path(&env.path);

    if !path.exists() {
        let mut details = vec![
            CheckDetail::missing(format!("{} file not found!", label)),
            CheckDetail::info(format!("Create {} with:", label)),
        ];
        details.extend(
            env.required_keys
                .iter()
                .map(|key| CheckDetail::info(format!("   {}", EnvFileConfig::example_line(key)))),
        );
        return Ok(CheckResult::new(name, false, details));
    }

    let bytes = fs::read(&path).map_err(|source| BotcheckError::EnvFileRead {
        path: path.clone(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let missing = missing_keys(&content, &env.required_keys);
    tracing::debug!(
        "Env file {} mentions {}/{} required keys",
        path.display(),
        env.required_keys.len() - missing.len(),
        env.required_keys.len()
    );

    let mut details = Vec::new();
    if missing.is_empty() {
        details.push(CheckDetail::found(format!(
            "{} file is properly configured",
            label
        )));
    } else {
        details.push(CheckDetail::missing(format!(
            "Missing variables: {}",
            missing.join(", ")
        )));
    }

    let assignments = EnvAssignments::parse(&content);
    for key in env.required_keys.iter().filter(|k| !missing.contains(&k.as_str())) {
        match assignments.get(key) {
            None => details.push(CheckDetail::warning(format!(
                "{} is mentioned but never assigned",
                key
            ))),
            Some("") => details.push(CheckDetail::warning(format!("{} is empty", key))),
            Some(_) => {}
        }
    }

    Ok(CheckResult::new(name, missing.is_empty(), details))
}

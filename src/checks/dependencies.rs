//! Dependency check.
//!
//! Every configured package is probed and reported on its own line, so a
//! failing check always says which package is missing.

use crate::error::Result;
use crate::probe::{DependencyProbe, ProbeOutcome};

use super::registry::CheckKind;
use super::result::{CheckDetail, CheckResult};
use super::CheckContext;

/// Check that every configured package can be imported.
///
/// # Errors
///
/// Propagates probe failures other than "not found".
pub fn check_dependencies(
    ctx: &CheckContext<'_>,
    probe: &dyn DependencyProbe,
) -> Result<CheckResult> {
    let mut passed = true;
    let mut details = Vec::new();

    for package in &ctx.checklist.dependencies.packages {
        let display = package.display_name();
        match probe.probe(package)? {
            ProbeOutcome::Available {
                version: Some(version),
            } => details.push(CheckDetail::found(format!("{} ({})", display, version))),
            ProbeOutcome::Available { version: None } => {
                details.push(CheckDetail::found(format!("{} installed", display)))
            }
            ProbeOutcome::NotFound { reason } => {
                tracing::debug!("{} unavailable: {}", package.module, reason);
                passed = false;
                details.push(CheckDetail::missing(format!(
                    "{} not installed ({})",
                    display, reason
                )));
            }
        }
    }

    Ok(CheckResult::new(
        CheckKind::Dependencies.display_name(),
        passed,
        details,
    ))
}

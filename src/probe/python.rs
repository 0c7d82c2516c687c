//! Python import probe.
//!
//! Runs the project's interpreter once per package with a tiny script that
//! imports the module. The script catches only a `ModuleNotFoundError` for
//! the package itself and signals it with a dedicated exit status, so any
//! other failure (a package that is installed but broken, a crashing
//! interpreter) surfaces as an error instead of a quiet "not installed".

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::PackageSpec;
use crate::error::{BotcheckError, Result};

use super::path::{parse_system_path, resolve_interpreter};
use super::{DependencyProbe, ProbeOutcome};

/// Exit status the import script uses for `ModuleNotFoundError`.
pub const MODULE_NOT_FOUND_EXIT: i32 = 3;

/// Script passed to `python -c`; the module name is `sys.argv[1]`.
///
/// Only a `ModuleNotFoundError` naming the module itself (or one of its
/// parent packages) maps to the not-found status. A missing transitive
/// import is re-raised so the package shows up as broken.
const IMPORT_SCRIPT: &str = "\
import importlib, sys
target = sys.argv[1]
try:
    module = importlib.import_module(target)
except ModuleNotFoundError as e:
    if e.name and (target == e.name or target.startswith(e.name + '.')):
        sys.exit(3)
    raise
print(getattr(module, '__version__', ''))
";

/// Probes packages by importing them with a Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonImportProbe {
    interpreter: String,
    project_root: PathBuf,
    path_entries: Vec<PathBuf>,
}

impl PythonImportProbe {
    /// Create a probe using the system PATH.
    ///
    /// Imports run with `project_root` as the working directory so local
    /// packages resolve the same way they do for the bot.
    pub fn new(interpreter: &str, project_root: &Path) -> Self {
        Self::with_path_entries(interpreter, project_root, parse_system_path())
    }

    /// Create a probe with explicit PATH entries.
    pub fn with_path_entries(
        interpreter: &str,
        project_root: &Path,
        path_entries: Vec<PathBuf>,
    ) -> Self {
        Self {
            interpreter: interpreter.to_string(),
            project_root: project_root.to_path_buf(),
            path_entries,
        }
    }

    /// Resolve the interpreter to an executable path.
    pub fn resolve(&self) -> Option<PathBuf> {
        resolve_interpreter(&self.interpreter, &self.project_root, &self.path_entries)
    }
}

impl DependencyProbe for PythonImportProbe {
    fn probe(&self, package: &PackageSpec) -> Result<ProbeOutcome> {
        let Some(interpreter) = self.resolve() else {
            tracing::debug!("Interpreter '{}' not found", self.interpreter);
            return Ok(ProbeOutcome::NotFound {
                reason: format!("interpreter '{}' not found", self.interpreter),
            });
        };

        tracing::debug!(
            "Probing '{}' with {}",
            package.module,
            interpreter.display()
        );

        let output = Command::new(&interpreter)
            .arg("-c")
            .arg(IMPORT_SCRIPT)
            .arg(&package.module)
            .current_dir(&self.project_root)
            .output()
            .map_err(|e| BotcheckError::ProbeFailed {
                package: package.module.clone(),
                message: format!("failed to run {}: {}", interpreter.display(), e),
            })?;

        match output.status.code() {
            Some(0) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let version = stdout.lines().last().unwrap_or("").trim();
                Ok(ProbeOutcome::Available {
                    version: (package.show_version && !version.is_empty())
                        .then(|| version.to_string()),
                })
            }
            Some(MODULE_NOT_FOUND_EXIT) => Ok(ProbeOutcome::NotFound {
                reason: "module not found".to_string(),
            }),
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let last_line = stderr.lines().last().unwrap_or("").trim();
                Err(BotcheckError::ProbeFailed {
                    package: package.module.clone(),
                    message: if last_line.is_empty() {
                        format!("interpreter exited with {}", output.status)
                    } else {
                        format!("interpreter exited with {}: {}", output.status, last_line)
                    },
                })
            }
        }
    }
}

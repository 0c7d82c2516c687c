//! Dependency probing.
//!
//! A probe answers one question per package: can the bot import it? Only a
//! clear "not found" answer becomes [`ProbeOutcome::NotFound`]. Anything
//! else that goes wrong is returned as an error so a broken environment is
//! not mistaken for a missing package.
//!
//! # Example
//!
//! ```
//! use botcheck::config::PackageSpec;
//! use botcheck::probe::{DependencyProbe, ProbeOutcome, StaticProbe};
//!
//! let probe = StaticProbe::new().with_available("discord", Some("2.3.2"));
//! let outcome = probe.probe(&PackageSpec::new("discord")).unwrap();
//! assert!(outcome.is_available());
//! assert!(!probe.probe(&PackageSpec::new("aiofiles")).unwrap().is_available());
//! ```

pub mod path;
pub mod python;

pub use path::{is_executable, parse_system_path, resolve_interpreter, resolve_tool_path};
pub use python::PythonImportProbe;

use std::collections::HashMap;

use crate::config::PackageSpec;
use crate::error::Result;

/// Answer from probing one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The package imports. `version` is set when requested and reported.
    Available { version: Option<String> },
    /// The package, or the interpreter needed to import it, is absent.
    NotFound { reason: String },
}

impl ProbeOutcome {
    /// Whether the package can be imported.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

/// Something that can tell whether a package is importable.
pub trait DependencyProbe {
    /// Probe a single package.
    ///
    /// # Errors
    ///
    /// Returns `ProbeFailed` when the probe itself breaks for any reason
    /// other than the package being absent.
    fn probe(&self, package: &PackageSpec) -> Result<ProbeOutcome>;
}

/// A probe with fixed answers, for tests and dry runs.
///
/// Modules not registered are reported as not found.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    available: HashMap<String, Option<String>>,
}

impl StaticProbe {
    /// Create a probe where nothing is installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a module as importable.
    pub fn with_available(mut self, module: &str, version: Option<&str>) -> Self {
        self.available
            .insert(module.to_string(), version.map(String::from));
        self
    }
}

impl DependencyProbe for StaticProbe {
    fn probe(&self, package: &PackageSpec) -> Result<ProbeOutcome> {
        Ok(match self.available.get(&package.module) {
            Some(version) => ProbeOutcome::Available {
                version: version.clone().filter(|_| package.show_version),
            },
            None => ProbeOutcome::NotFound {
                reason: "module not found".to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_probe_reports_registered_modules() {
        let probe = StaticProbe::new().with_available("dotenv", None);
        assert!(probe.probe(&PackageSpec::new("dotenv")).unwrap().is_available());
        assert_eq!(
            probe.probe(&PackageSpec::new("aiofiles")).unwrap(),
            ProbeOutcome::NotFound {
                reason: "module not found".to_string()
            }
        );
    }

    #[test]
    fn static_probe_hides_version_unless_requested() {
        let probe = StaticProbe::new().with_available("discord", Some("2.3.2"));

        let plain = probe.probe(&PackageSpec::new("discord")).unwrap();
        assert_eq!(plain, ProbeOutcome::Available { version: None });

        let mut spec = PackageSpec::new("discord");
        spec.show_version = true;
        let versioned = probe.probe(&spec).unwrap();
        assert_eq!(
            versioned,
            ProbeOutcome::Available {
                version: Some("2.3.2".to_string())
            }
        );
    }
}

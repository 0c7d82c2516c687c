//! Validation orchestration.
//!
//! The [`Validator`] runs the selected checks in order, renders each one
//! through a [`UserInterface`] and collects the results into a
//! [`ValidationReport`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::checks::{
    check_command_modules, check_data_dir, check_dependencies, check_env_file,
    check_required_files, display_path, CheckContext, CheckKind, CheckRegistry, CheckResult,
};
use crate::config::Checklist;
use crate::error::Result;
use crate::probe::{DependencyProbe, PythonImportProbe};
use crate::report::{render_details, render_summary, ValidationReport};
use crate::ui::UserInterface;

/// Runs the pre-flight checks for one bot project.
pub struct Validator {
    project_root: PathBuf,
    checklist: Checklist,
    registry: CheckRegistry,
    probe: Box<dyn DependencyProbe>,
}

impl Validator {
    /// Create a validator running every check, probing packages with the
    /// checklist's interpreter.
    pub fn new(project_root: &Path, checklist: Checklist) -> Self {
        let probe = PythonImportProbe::new(&checklist.dependencies.interpreter, project_root);
        Self {
            project_root: project_root.to_path_buf(),
            checklist,
            registry: CheckRegistry::default(),
            probe: Box::new(probe),
        }
    }

    /// Restrict the run to the checks in `registry`.
    pub fn with_registry(mut self, registry: CheckRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the dependency probe.
    pub fn with_probe(mut self, probe: impl DependencyProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Section title announcing a check.
    pub fn section_title(&self, kind: CheckKind) -> String {
        match kind {
            CheckKind::EnvFile => format!(
                "Checking {} file...",
                display_path(&self.checklist.env_file.path)
            ),
            CheckKind::RequiredFiles => "Checking required files...".to_string(),
            CheckKind::CommandModules => format!(
                "Checking {}/ folder...",
                display_path(&self.checklist.commands.dir)
            ),
            CheckKind::DataFolder => format!(
                "Checking {}/ folder...",
                display_path(&self.checklist.data_dir)
            ),
            CheckKind::Dependencies => "Checking Python dependencies...".to_string(),
        }
    }

    /// Run a single check without rendering it.
    pub fn run_check(&self, kind: CheckKind, ui: &mut dyn UserInterface) -> Result<CheckResult> {
        let ctx = CheckContext::new(&self.project_root, &self.checklist);
        debug!("Running check '{}'", kind.id());

        match kind {
            CheckKind::EnvFile => check_env_file(&ctx),
            CheckKind::RequiredFiles => Ok(check_required_files(&ctx)),
            CheckKind::CommandModules => Ok(check_command_modules(&ctx)),
            CheckKind::DataFolder => check_data_dir(&ctx),
            CheckKind::Dependencies => {
                let count = self.checklist.dependencies.packages.len();
                let mut spinner = ui.start_spinner(&format!(
                    "Probing {} package{}...",
                    count,
                    if count == 1 { "" } else { "s" }
                ));
                let result = check_dependencies(&ctx, self.probe.as_ref());
                spinner.finish();
                result
            }
        }
    }

    /// Run every selected check and render the full report.
    ///
    /// A check that comes back as an error aborts the run; missing items
    /// only fail their own check.
    pub fn run_all_checks(&self, ui: &mut dyn UserInterface) -> Result<ValidationReport> {
        let detailed = ui.output_mode().shows_details();
        let bot = &self.checklist.bot;

        ui.show_header(&format!("{} - VALIDATION", bot.name));

        let mut results = Vec::with_capacity(self.registry.len());
        for kind in self.registry.iter() {
            if detailed {
                ui.show_section(&self.section_title(kind));
            }
            let result = self.run_check(kind, ui)?;
            debug!(
                "Check '{}' {}",
                kind.id(),
                if result.passed() { "passed" } else { "failed" }
            );
            if detailed {
                render_details(ui, &result);
            }
            results.push(result);
        }

        let report = ValidationReport::new(&bot.name, &self.project_root, results);
        render_summary(ui, &report, bot);
        Ok(report)
    }
}

//! Validation report.
//!
//! A [`ValidationReport`] holds the ordered check results of one run and the
//! overall verdict. It renders either through a [`UserInterface`] or as
//! JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::checks::CheckResult;
use crate::config::BotInfo;
use crate::error::Result;
use crate::ui::{StatusKind, UserInterface};

/// Results of one validator run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    bot_name: String,
    project_root: PathBuf,
    generated_at: DateTime<Utc>,
    passed: bool,
    results: Vec<CheckResult>,
}

impl ValidationReport {
    /// Build a report. The verdict is the AND of every result.
    pub fn new(bot_name: &str, project_root: &Path, results: Vec<CheckResult>) -> Self {
        Self {
            bot_name: bot_name.to_string(),
            project_root: project_root.to_path_buf(),
            generated_at: Utc::now(),
            passed: results.iter().all(CheckResult::passed),
            results,
        }
    }

    /// Name of the bot that was checked.
    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    /// Directory the checks ran against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// When the report was produced.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Overall verdict.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Results in check order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Results that failed.
    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed())
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report: {}", e).into())
    }
}

/// Render the detail lines of one check.
pub fn render_details(ui: &mut dyn UserInterface, result: &CheckResult) {
    for detail in result.details() {
        ui.show_status(detail.kind.into(), &detail.message);
    }
}

/// Render the summary block, verdict and follow-up hint.
pub fn render_summary(ui: &mut dyn UserInterface, report: &ValidationReport, bot: &BotInfo) {
    ui.message("");
    ui.show_header("VALIDATION SUMMARY");

    for result in report.results() {
        ui.show_status(
            StatusKind::from_passed(result.passed()),
            &format!("{} - {}", result.status_label(), result.name()),
        );
    }

    ui.show_rule();
    if report.passed() {
        ui.show_status(
            StatusKind::Success,
            "ALL CHECKS PASSED! Bot is ready to run.",
        );
        ui.show_hint(&format!("Start the bot with: {}", bot.run_instruction()));
    } else {
        ui.show_status(
            StatusKind::Failed,
            "SOME CHECKS FAILED! Fix the issues above before running.",
        );
        ui.show_hint(&format!(
            "Install dependencies: {}",
            bot.install_instruction()
        ));
    }
    ui.show_rule();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckDetail;
    use crate::ui::MockUI;

    fn sample(passes: &[bool]) -> ValidationReport {
        let results = passes
            .iter()
            .enumerate()
            .map(|(i, passed)| CheckResult::new(format!("Check {}", i), *passed, vec![]))
            .collect();
        ValidationReport::new("Test Bot", Path::new("/bot"), results)
    }

    #[test]
    fn verdict_is_and_of_results() {
        assert!(sample(&[true, true, true]).passed());
        assert!(!sample(&[true, false, true]).passed());
    }

    #[test]
    fn empty_report_passes() {
        assert!(sample(&[]).passed());
    }

    #[test]
    fn results_keep_check_order() {
        let report = sample(&[true, false]);
        let names: Vec<_> = report.results().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Check 0", "Check 1"]);
        assert_eq!(report.failed_checks().count(), 1);
    }

    #[test]
    fn json_mirrors_results() {
        let results = vec![CheckResult::new(
            "Required Files",
            false,
            vec![CheckDetail::missing("Missing: bot.py")],
        )];
        let report = ValidationReport::new("Test Bot", Path::new("/bot"), results);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["bot_name"], "Test Bot");
        assert_eq!(json["passed"], false);
        assert_eq!(json["results"][0]["name"], "Required Files");
        assert_eq!(json["results"][0]["details"][0]["kind"], "missing");
        assert!(json["generated_at"].is_string());
    }

    #[test]
    fn summary_for_passing_report() {
        let mut ui = MockUI::new();
        render_summary(&mut ui, &sample(&[true]), &BotInfo::default());

        assert_eq!(ui.headers(), &["VALIDATION SUMMARY".to_string()]);
        assert!(ui.has_status(StatusKind::Success, "PASS - Check 0"));
        assert!(ui.has_status(StatusKind::Success, "ALL CHECKS PASSED"));
        assert!(ui.has_hint("Start the bot with: python bot.py"));
        assert!(!ui.has_hint("pip install"));
    }

    #[test]
    fn summary_for_failing_report() {
        let mut ui = MockUI::new();
        render_summary(&mut ui, &sample(&[true, false]), &BotInfo::default());

        assert!(ui.has_status(StatusKind::Success, "PASS - Check 0"));
        assert!(ui.has_status(StatusKind::Failed, "FAIL - Check 1"));
        assert!(ui.has_status(StatusKind::Failed, "SOME CHECKS FAILED"));
        assert!(ui.has_hint("Install dependencies: pip install -r requirements.txt"));
    }

    #[test]
    fn details_render_with_matching_status() {
        let mut ui = MockUI::new();
        let result = CheckResult::new(
            "Data Folder",
            true,
            vec![
                CheckDetail::warning("data/ folder not found, creating..."),
                CheckDetail::created("Created data/ folder"),
            ],
        );

        render_details(&mut ui, &result);

        assert_eq!(
            ui.statuses(),
            &[
                (
                    StatusKind::Warning,
                    "data/ folder not found, creating...".to_string()
                ),
                (StatusKind::Success, "Created data/ folder".to_string()),
            ]
        );
    }
}

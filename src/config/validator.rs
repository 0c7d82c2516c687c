//! Checklist validation rules.
//!
//! This module validates a checklist before any check runs:
//! - Required keys must be valid environment variable names
//! - Package modules must be importable dotted names
//! - Paths must be relative and stay inside the project root
//! - No list may contain duplicates

use crate::config::schema::Checklist;
use crate::error::{BotcheckError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::path::{Component, Path};
use std::sync::LazyLock;

/// Regex for environment variable names.
static ENV_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("ENV_KEY_REGEX must compile")
});

/// Regex for dotted Python module names.
static MODULE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("MODULE_REGEX must compile")
});

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a checklist and return all errors.
///
/// All problems are collected so they can be fixed in one pass.
pub fn validate_checklist(checklist: &Checklist) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_env_file(checklist));
    errors.extend(validate_relative_path("required_files", checklist.required_files.iter()));
    errors.extend(validate_duplicates("required_files", checklist.required_files.iter()));
    errors.extend(validate_relative_path(
        "commands.dir",
        std::iter::once(&checklist.commands.dir),
    ));
    errors.extend(validate_relative_path("commands.modules", checklist.commands.modules.iter()));
    errors.extend(validate_duplicates("commands.modules", checklist.commands.modules.iter()));
    errors.extend(validate_relative_path("data_dir", std::iter::once(&checklist.data_dir)));
    errors.extend(validate_dependencies(checklist));

    errors
}

/// Validate a checklist, failing with every error joined into one message.
pub fn validate(checklist: &Checklist) -> Result<()> {
    let errors = validate_checklist(checklist);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| format!("[{}] {}", e.rule, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(BotcheckError::ConfigValidationError { message })
}

fn validate_env_file(checklist: &Checklist) -> Vec<ValidationError> {
    let mut errors =
        validate_relative_path("env_file.path", std::iter::once(&checklist.env_file.path));

    for key in &checklist.env_file.required_keys {
        if !ENV_KEY_REGEX.is_match(key) {
            errors.push(ValidationError::new(
                "invalid-env-key",
                format!("'{}' is not a valid environment variable name", key),
            ));
        }
    }
    errors.extend(validate_duplicates(
        "env_file.required_keys",
        checklist.env_file.required_keys.iter(),
    ));

    errors
}

fn validate_dependencies(checklist: &Checklist) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let deps = &checklist.dependencies;

    if deps.interpreter.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-interpreter",
            "dependencies.interpreter must not be empty".to_string(),
        ));
    }

    for package in &deps.packages {
        if !MODULE_REGEX.is_match(&package.module) {
            errors.push(ValidationError::new(
                "invalid-module",
                format!("'{}' is not an importable module name", package.module),
            ));
        }
    }
    errors.extend(validate_duplicates(
        "dependencies.packages",
        deps.packages.iter().map(|p| &p.module),
    ));

    errors
}

fn validate_relative_path<'a, I, P>(field: &str, entries: I) -> Vec<ValidationError>
where
    I: IntoIterator<Item = &'a P>,
    P: AsRef<Path> + ?Sized + 'a,
{
    let mut errors = Vec::new();

    for entry in entries {
        let path = entry.as_ref();
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "empty-path",
                format!("{} contains an empty entry", field),
            ));
        } else if path.is_absolute() || path.has_root() {
            errors.push(ValidationError::new(
                "absolute-path",
                format!(
                    "{} entry '{}' must be relative to the project root",
                    field,
                    path.display()
                ),
            ));
        } else if path.components().any(|c| matches!(c, Component::ParentDir)) {
            errors.push(ValidationError::new(
                "parent-path",
                format!(
                    "{} entry '{}' must not leave the project root",
                    field,
                    path.display()
                ),
            ));
        }
    }

    errors
}

fn validate_duplicates<'a, I>(field: &str, entries: I) -> Vec<ValidationError>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for entry in entries {
        if !seen.insert(entry.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-entry",
                format!("{} lists '{}' more than once", field, entry),
            ));
        }
    }

    errors
}

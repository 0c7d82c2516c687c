//! Checklist configuration for botcheck.
//!
//! This module handles the declarative checklist that drives every check:
//! - Schema definitions and built-in defaults in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//! - `.env` assignment parsing in [`env_file`]
//!
//! # Example
//!
//! ```
//! use botcheck::config::load_checklist;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".botcheck.yml"), "required_files: [main.py]").unwrap();
//!
//! let checklist = load_checklist(temp.path(), None).unwrap();
//! assert_eq!(checklist.required_files, vec!["main.py".to_string()]);
//! ```

pub mod env_file;
pub mod loader;
pub mod schema;
pub mod validator;

pub use env_file::EnvAssignments;
pub use loader::{
    find_checklist_file, load_checklist, load_checklist_file, parse_checklist,
    CHECKLIST_FILE_NAMES,
};
pub use schema::{
    BotInfo, Checklist, CommandsConfig, DependenciesConfig, EnvFileConfig, PackageSpec,
};
pub use validator::{validate, validate_checklist, ValidationError};

//! botcheck - Pre-flight validation for Discord bot projects.
//!
//! botcheck inspects a bot project before it is started: the env file and
//! the keys it must mention, the required top-level files, the command
//! modules, the data folder (created when missing) and the Python packages
//! the bot imports. Every check runs independently and the results are
//! rolled up into one pass/fail verdict.
//!
//! # Modules
//!
//! - [`checks`] - The individual checks and their result types
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Checklist loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Python package availability probes
//! - [`report`] - Report assembly and rendering
//! - [`ui`] - Spinners, status lines, and terminal output
//! - [`validator`] - Runs the checks and builds the report
//!
//! # Example
//!
//! ```
//! use botcheck::checks::missing_keys;
//!
//! let required = vec!["DISCORD_TOKEN".to_string(), "PREFIX".to_string()];
//! let missing = missing_keys("DISCORD_TOKEN=abc\n", &required);
//! assert_eq!(missing, vec!["PREFIX"]);
//! ```
//!
//! For full runs against a project directory, see the integration tests.

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod ui;
pub mod validator;

pub use error::{BotcheckError, Result};
pub use report::ValidationReport;
pub use validator::Validator;

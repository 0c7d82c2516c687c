//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Botcheck - Pre-flight validation for Discord bot projects.
#[derive(Debug, Parser)]
#[command(name = "botcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to checklist file (overrides .botcheck.yml discovery)
    #[arg(short, long, global = true, env = "BOTCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to bot project root (overrides current directory)
    #[arg(short, long, global = true, env = "BOTCHECK_PROJECT")]
    pub project: Option<PathBuf>,

    /// Only show the summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the pre-flight checks (default if no command specified)
    Check(CheckArgs),

    /// List the checks and what each one looks for
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Run only the specified checks (comma-separated: env, files, commands, data, deps)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Exit with status 1 when any check fails
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output the resolved checklist as JSON
    #[arg(long)]
    pub json: bool,

    /// Output the resolved checklist as YAML
    #[arg(long, conflicts_with = "json")]
    pub yaml: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

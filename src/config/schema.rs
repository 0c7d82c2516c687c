//! Checklist schema definitions.
//!
//! These structs map to the optional `.botcheck.yml` file. Every field has a
//! default, so an empty file (or no file at all) yields the built-in
//! checklist for a discord.py bot laid out as `bot.py` + `commands/` +
//! `data/`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root checklist structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checklist {
    /// Bot metadata used for the banner and guidance lines.
    pub bot: BotInfo,

    /// Environment file and the keys it must mention.
    pub env_file: EnvFileConfig,

    /// Top-level files that must exist in the project root.
    pub required_files: Vec<String>,

    /// Command module folder and its expected modules.
    pub commands: CommandsConfig,

    /// Data directory, created on demand.
    pub data_dir: PathBuf,

    /// Third-party packages the bot imports.
    pub dependencies: DependenciesConfig,
}

impl Default for Checklist {
    fn default() -> Self {
        Self {
            bot: BotInfo::default(),
            env_file: EnvFileConfig::default(),
            required_files: vec![
                "bot.py".to_string(),
                "data_manager.py".to_string(),
                "requirements.txt".to_string(),
            ],
            commands: CommandsConfig::default(),
            data_dir: PathBuf::from("data"),
            dependencies: DependenciesConfig::default(),
        }
    }
}

/// Display and guidance metadata for the bot being checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotInfo {
    /// Name shown in the report banner
    pub name: String,

    /// Script started when all checks pass
    pub entrypoint: String,

    /// Requirements file suggested when checks fail
    pub requirements: String,
}

impl Default for BotInfo {
    fn default() -> Self {
        Self {
            name: "ATOMIC DARK EMPIRE BOT".to_string(),
            entrypoint: "bot.py".to_string(),
            requirements: "requirements.txt".to_string(),
        }
    }
}

impl BotInfo {
    /// Command printed when every check passes.
    pub fn run_instruction(&self) -> String {
        format!("python {}", self.entrypoint)
    }

    /// Command printed when any check fails.
    pub fn install_instruction(&self) -> String {
        format!("pip install -r {}", self.requirements)
    }
}

/// Environment file location and required keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvFileConfig {
    /// Path relative to the project root
    pub path: PathBuf,

    /// Key names that must appear somewhere in the file text
    pub required_keys: Vec<String>,
}

impl Default for EnvFileConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".env"),
            required_keys: vec![
                "DISCORD_TOKEN".to_string(),
                "OWNER_ID".to_string(),
                "PREFIX".to_string(),
            ],
        }
    }
}

impl EnvFileConfig {
    /// Example `KEY=value` line for a required key, shown when the file is missing.
    pub fn example_line(key: &str) -> String {
        let placeholder = match key {
            "DISCORD_TOKEN" => "your_token_here",
            "OWNER_ID" => "your_discord_id",
            "PREFIX" => "!",
            _ => "...",
        };
        format!("{}={}", key, placeholder)
    }
}

/// Command module folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Folder relative to the project root
    pub dir: PathBuf,

    /// Module file names expected inside the folder
    pub modules: Vec<String>,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("commands"),
            modules: [
                "economy.py",
                "teams.py",
                "marketplace.py",
                "moderation.py",
                "server_build.py",
                "help_admin.py",
            ]
            .iter()
            .map(|m| m.to_string())
            .collect(),
        }
    }
}

/// Python dependencies and the interpreter used to probe them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependenciesConfig {
    /// Interpreter name (looked up on PATH) or path
    pub interpreter: String,

    /// Packages to probe, in report order
    pub packages: Vec<PackageSpec>,
}

impl Default for DependenciesConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            packages: vec![
                PackageSpec {
                    module: "discord".to_string(),
                    display: Some("discord.py".to_string()),
                    show_version: true,
                },
                PackageSpec::new("dotenv").with_display("python-dotenv"),
                PackageSpec::new("aiofiles"),
            ],
        }
    }
}

/// A single importable package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSpec {
    /// Importable module name (e.g. `dotenv`)
    pub module: String,

    /// Distribution name shown to the user (e.g. `python-dotenv`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Report the module's `__version__` when available
    #[serde(default, skip_serializing_if = "is_false")]
    pub show_version: bool,
}

impl PackageSpec {
    /// Create a package spec for a module.
    pub fn new(module: &str) -> Self {
        Self {
            module: module.to_string(),
            display: None,
            show_version: false,
        }
    }

    /// Set the display name.
    pub fn with_display(mut self, display: &str) -> Self {
        self.display = Some(display.to_string());
        self
    }

    /// Name shown in report lines.
    pub fn display_name(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.module)
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

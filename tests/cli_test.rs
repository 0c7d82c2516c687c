//! Integration tests for the botcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Checklist that skips package probing so runs don't depend on the host.
const NO_PACKAGES: &str = "dependencies:\n  packages: []\n";

const MODULES: [&str; 6] = [
    "economy.py",
    "teams.py",
    "marketplace.py",
    "moderation.py",
    "server_build.py",
    "help_admin.py",
];

fn empty_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".botcheck.yml"), NO_PACKAGES).unwrap();
    temp
}

fn ready_project() -> TempDir {
    let temp = empty_project();
    let root = temp.path();
    fs::write(
        root.join(".env"),
        "DISCORD_TOKEN=abc\nOWNER_ID=123\nPREFIX=!\n",
    )
    .unwrap();
    for file in ["bot.py", "data_manager.py", "requirements.txt"] {
        fs::write(root.join(file), "").unwrap();
    }
    fs::create_dir(root.join("commands")).unwrap();
    for module in MODULES {
        fs::write(root.join("commands").join(module), "").unwrap();
    }
    temp
}

fn botcheck(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("botcheck"));
    cmd.current_dir(project).env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("botcheck"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Pre-flight validation"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("botcheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn ready_project_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ready_project();
    botcheck(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ATOMIC DARK EMPIRE BOT - VALIDATION",
        ))
        .stdout(predicate::str::contains(".env file is properly configured"))
        .stdout(predicate::str::contains("PASS - Dependencies"))
        .stdout(predicate::str::contains(
            "ALL CHECKS PASSED! Bot is ready to run.",
        ))
        .stdout(predicate::str::contains("Start the bot with: python bot.py"));
    Ok(())
}

#[test]
fn empty_project_fails_but_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    botcheck(temp.path())
        .arg("check")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(".env file not found!"))
        .stdout(predicate::str::contains("DISCORD_TOKEN=your_token_here"))
        .stdout(predicate::str::contains("commands/ folder not found!"))
        .stdout(predicate::str::contains("Created data/ folder"))
        .stdout(predicate::str::contains("FAIL - Environment File"))
        .stdout(predicate::str::contains("PASS - Data Folder"))
        .stdout(predicate::str::contains(
            "SOME CHECKS FAILED! Fix the issues above before running.",
        ))
        .stdout(predicate::str::contains(
            "Install dependencies: pip install -r requirements.txt",
        ));
    assert!(temp.path().join("data").is_dir());
    Ok(())
}

#[test]
fn strict_exits_one_on_failure() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    botcheck(temp.path())
        .args(["check", "--strict"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn strict_exits_zero_when_ready() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ready_project();
    botcheck(temp.path())
        .args(["check", "--strict"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn second_run_finds_created_data_folder() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ready_project();
    botcheck(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created data/ folder"));
    botcheck(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("data/ folder exists"))
        .stdout(predicate::str::contains("Created data/ folder").not());
    Ok(())
}

#[test]
fn missing_module_does_not_hide_others() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ready_project();
    fs::remove_file(temp.path().join("commands/teams.py"))?;
    botcheck(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found: economy.py"))
        .stdout(predicate::str::contains("Missing: commands/teams.py"))
        .stdout(predicate::str::contains("Found: help_admin.py"))
        .stdout(predicate::str::contains("FAIL - Commands Modules"))
        .stdout(predicate::str::contains("PASS - Required Files"));
    Ok(())
}

#[test]
fn missing_env_keys_are_listed() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ready_project();
    fs::write(temp.path().join(".env"), "DISCORD_TOKEN=abc\n")?;
    botcheck(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing variables: OWNER_ID, PREFIX"));
    Ok(())
}

#[test]
fn json_output_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    let output = botcheck(temp.path()).args(["check", "--json"]).output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["passed"], false);
    assert_eq!(report["results"].as_array().map(Vec::len), Some(5));
    assert_eq!(report["results"][3]["name"], "Data Folder");
    assert_eq!(report["results"][3]["details"][1]["kind"], "created");
    Ok(())
}

#[test]
fn only_runs_selected_checks() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    botcheck(temp.path())
        .args(["check", "--only", "files,deps", "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL - Required Files"))
        .stdout(predicate::str::contains("Environment File").not())
        .stdout(predicate::str::contains("Data Folder").not());
    assert!(!temp.path().join("data").exists());
    Ok(())
}

#[test]
fn unknown_check_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    botcheck(temp.path())
        .args(["check", "--only", "tokens"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown check 'tokens'"));
    Ok(())
}

#[test]
fn quiet_shows_only_summary() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ready_project();
    botcheck(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS - Required Files"))
        .stdout(predicate::str::contains("Found: bot.py").not())
        .stdout(predicate::str::contains("Checking required files...").not());
    Ok(())
}

#[test]
fn project_flag_overrides_cwd() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ready_project();
    let elsewhere = TempDir::new()?;
    botcheck(elsewhere.path())
        .arg("--project")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ALL CHECKS PASSED!"));
    Ok(())
}

#[test]
fn project_env_var_overrides_cwd() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ready_project();
    let elsewhere = TempDir::new()?;
    botcheck(elsewhere.path())
        .env("BOTCHECK_PROJECT", temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ALL CHECKS PASSED!"));
    Ok(())
}

#[test]
fn project_flag_wins_over_env_var() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ready_project();
    let elsewhere = TempDir::new()?;
    botcheck(elsewhere.path())
        .env("BOTCHECK_PROJECT", elsewhere.path())
        .arg("--project")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ALL CHECKS PASSED!"));
    Ok(())
}

#[test]
fn config_env_var_points_at_checklist() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    botcheck(temp.path())
        .env("BOTCHECK_CONFIG", "missing.yml")
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.yml"));
    Ok(())
}

#[test]
fn custom_checklist_changes_targets() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".botcheck.yml"),
        r#"
bot:
  name: TEST BOT
  entrypoint: main.py
env_file:
  required_keys: [TOKEN]
required_files: [main.py]
commands:
  dir: cogs
  modules: [fun.py]
data_dir: storage
dependencies:
  packages: []
"#,
    )?;
    fs::write(temp.path().join(".env"), "TOKEN=x\n")?;
    fs::write(temp.path().join("main.py"), "")?;
    fs::create_dir(temp.path().join("cogs"))?;
    fs::write(temp.path().join("cogs/fun.py"), "")?;

    botcheck(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("TEST BOT - VALIDATION"))
        .stdout(predicate::str::contains("Checking cogs/ folder..."))
        .stdout(predicate::str::contains("Start the bot with: python main.py"));
    assert!(temp.path().join("storage").is_dir());
    Ok(())
}

#[test]
fn broken_checklist_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".botcheck.yml"), "required_files: {")?;
    botcheck(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse checklist"));
    Ok(())
}

#[test]
fn unreadable_checklist_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir(temp.path().join("checklist.yml"))?;
    botcheck(temp.path())
        .args(["--config", "checklist.yml", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read checklist"))
        .stderr(predicate::str::contains("checklist.yml"))
        .stdout(predicate::str::contains("VALIDATION").not());
    Ok(())
}

#[test]
fn uncreatable_data_folder_aborts_with_exit_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ready_project();
    fs::write(
        temp.path().join(".botcheck.yml"),
        "data_dir: blocker/data\ndependencies:\n  packages: []\n",
    )?;
    fs::write(temp.path().join("blocker"), "")?;
    botcheck(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to create data directory"))
        .stdout(predicate::str::contains("VALIDATION SUMMARY").not());
    Ok(())
}

#[test]
fn unreadable_env_file_aborts_with_exit_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ready_project();
    fs::remove_file(temp.path().join(".env"))?;
    fs::create_dir(temp.path().join(".env"))?;
    botcheck(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read env file"))
        .stdout(predicate::str::contains("VALIDATION SUMMARY").not());
    Ok(())
}

#[test]
fn explicit_missing_checklist_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    botcheck(temp.path())
        .args(["--config", "missing.yml", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Checklist not found"));
    Ok(())
}

#[test]
fn list_shows_checks() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    botcheck(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands Modules"))
        .stdout(predicate::str::contains("data/ (created if missing)"));
    Ok(())
}

#[test]
fn completions_generate_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    botcheck(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("botcheck"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn dependencies_probe_project_interpreter() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let temp = ready_project();
    fs::write(
        temp.path().join(".botcheck.yml"),
        "dependencies:\n  interpreter: ./venv/python\n",
    )?;
    fs::create_dir(temp.path().join("venv"))?;
    let python = temp.path().join("venv/python");
    fs::write(
        &python,
        "#!/bin/sh\ncase \"$3\" in\n  discord) echo \"2.3.2\"; exit 0 ;;\n  dotenv) exit 0 ;;\n  *) exit 3 ;;\nesac\n",
    )?;
    fs::set_permissions(&python, fs::Permissions::from_mode(0o755))?;

    botcheck(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("discord.py (2.3.2)"))
        .stdout(predicate::str::contains("python-dotenv installed"))
        .stdout(predicate::str::contains("aiofiles not installed"))
        .stdout(predicate::str::contains("FAIL - Dependencies"));
    Ok(())
}

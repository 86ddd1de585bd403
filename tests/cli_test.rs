//! Integration tests for the agentrig binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const INDEX: &str = "\
| ID | Name | Description | File |
|----|------|-------------|------|
| local | Local Template | Lives on disk | local.md |
| broken | Broken | File is missing | missing.md |
";

const LOCAL_TEMPLATE: &str = r#"---
id: local
name: "Local Template"
version: 3
---
## claude_md
Local instructions.

## skills
### deploy
```markdown
Deploy with care.
```
"#;

fn agentrig() -> Command {
    let mut cmd = Command::new(cargo_bin("agentrig"));
    cmd.env_remove("AGENTRIG_TEMPLATES_DIR").env("NO_COLOR", "1");
    cmd
}

fn setup_templates() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("_index.md"), INDEX).unwrap();
    fs::write(temp.path().join("local.md"), LOCAL_TEMPLATE).unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    agentrig()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("templates"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    agentrig()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_lists_bundled_templates() -> Result<(), Box<dyn std::error::Error>> {
    agentrig()
        .assert()
        .success()
        .stdout(predicate::str::contains("python-api"))
        .stdout(predicate::str::contains("rust-cli"));
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = agentrig().args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(entries[0]["id"], "python-api");
    Ok(())
}

#[test]
fn cli_list_from_templates_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates();
    agentrig()
        .arg("list")
        .arg("--templates-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Local Template"))
        .stdout(predicate::str::contains("python-api").not());
    Ok(())
}

#[test]
fn cli_templates_dir_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates();
    agentrig()
        .env("AGENTRIG_TEMPLATES_DIR", temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("local.md"));
    Ok(())
}

#[test]
fn cli_show_yaml() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates();
    agentrig()
        .arg("--templates-dir")
        .arg(temp.path())
        .args(["show", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id: local"))
        .stdout(predicate::str::contains("version: 3"))
        .stdout(predicate::str::contains("Deploy with care."));
    Ok(())
}

#[test]
fn cli_show_json_section() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates();
    let output = agentrig()
        .arg("--templates-dir")
        .arg(temp.path())
        .args(["show", "local", "--json", "--section", "skills"])
        .output()?;
    assert!(output.status.success());

    let skills: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(skills, serde_json::json!({"deploy": "Deploy with care."}));
    Ok(())
}

#[test]
fn cli_show_bundled_hooks() -> Result<(), Box<dyn std::error::Error>> {
    let output = agentrig()
        .args(["show", "python-api", "--section", "hooks", "--json"])
        .output()?;
    assert!(output.status.success());

    let hooks: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(hooks["PostToolUse"].is_array());
    Ok(())
}

#[test]
fn cli_show_unknown_template_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    agentrig()
        .args(["show", "nonexistent"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown template: nonexistent"));
    Ok(())
}

#[test]
fn cli_show_unknown_section_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    agentrig()
        .args(["show", "python-api", "--section", "extras"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("extras"));
    Ok(())
}

#[test]
fn cli_show_missing_template_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_templates();
    agentrig()
        .arg("--templates-dir")
        .arg(temp.path())
        .args(["show", "broken"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.md"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    agentrig()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("agentrig"));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    agentrig().arg("install").assert().failure();
    Ok(())
}

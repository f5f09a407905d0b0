//! Tests for the `check` command

use crate::helpers::*;
use anyhow::Result;

const VALID_CONFIG: &str = r#"
branches = "main"
repositoryUrl = "https://github.com/owner/repo.git"
plugins = [
  "@semantic-release/commit-analyzer",
  "@semantic-release/release-notes-generator",
  "@semantic-release/git",
  "@semantic-release/github",
]
"#;

#[test]
fn test_check_accepts_valid_config() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_config("release.toml", VALID_CONFIG)?;

  let output = run_relcheck(&dir.path, &["check"])?;
  let stdout = stdout_of(&output);

  assert!(stdout.contains("Configuration is valid"));
  assert!(stdout.contains("release.toml"));

  Ok(())
}

#[test]
fn test_check_lists_plugins_in_declared_order() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_config(
    "release.toml",
    r#"
branches = "main"
repositoryUrl = "https://github.com/owner/repo.git"
plugins = ["z-last", "a-first"]
"#,
  )?;

  let output = run_relcheck(&dir.path, &["check"])?;
  let stdout = stdout_of(&output);

  let z_pos = stdout.find("z-last").unwrap();
  let a_pos = stdout.find("a-first").unwrap();
  assert!(z_pos < a_pos, "plugins must be listed in declared order");

  Ok(())
}

#[test]
fn test_check_fails_without_config() -> Result<()> {
  let dir = TestDir::new()?;

  let output = relcheck_output(&dir.path, &["check"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr_of(&output).contains("No release configuration found"));

  Ok(())
}

#[test]
fn test_check_rejects_duplicate_plugin() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_config(
    "release.toml",
    r#"
branches = "main"
repositoryUrl = "https://github.com/owner/repo.git"
plugins = ["a", "a"]
"#,
  )?;

  let output = relcheck_output(&dir.path, &["check"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr_of(&output).contains("Duplicate plugin identifier: 'a'"));

  Ok(())
}

#[test]
fn test_check_rejects_malformed_repository_url() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_config(
    "release.toml",
    r#"
branches = "main"
repositoryUrl = "not-a-url"
"#,
  )?;

  let output = relcheck_output(&dir.path, &["check"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr_of(&output).contains("not a well-formed URL"));

  Ok(())
}

#[test]
fn test_check_rejects_empty_branches() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_config(
    "release.toml",
    r#"
branches = ""
repositoryUrl = "https://github.com/owner/repo.git"
"#,
  )?;

  let output = relcheck_output(&dir.path, &["check"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr_of(&output).contains("Missing required field in config: branches"));

  Ok(())
}

#[test]
fn test_check_json_report() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_config("release.toml", VALID_CONFIG)?;

  let output = run_relcheck(&dir.path, &["check", "--json"])?;
  let report: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;

  assert_eq!(report["valid"], true);
  assert_eq!(
    report["config"]["repositoryUrl"],
    "https://github.com/owner/repo.git"
  );
  assert_eq!(report["config"]["tagFormat"], "v${version}");

  Ok(())
}

#[test]
fn test_check_honors_search_order() -> Result<()> {
  let dir = TestDir::new()?;
  // Both present: release.toml wins over .releaserc.json
  dir.write_config("release.toml", VALID_CONFIG)?;
  dir.write_config(".releaserc.json", r#"{"branches": ""}"#)?;

  let output = run_relcheck(&dir.path, &["check"])?;
  assert!(stdout_of(&output).contains("release.toml"));

  Ok(())
}

#[test]
fn test_check_parses_json_config() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_config(
    ".releaserc.json",
    r#"{
      "branches": "main",
      "repositoryUrl": "https://github.com/Henrydoglass/bootcamp32.git",
      "plugins": [
        "@semantic-release/commit-analyzer",
        "@semantic-release/release-notes-generator",
        "@semantic-release/git",
        "@semantic-release/github"
      ]
    }"#,
  )?;

  let output = run_relcheck(&dir.path, &["check"])?;
  let stdout = stdout_of(&output);

  assert!(stdout.contains("Configuration is valid"));
  assert!(stdout.contains("https://github.com/Henrydoglass/bootcamp32.git"));

  Ok(())
}

#[test]
fn test_check_accepts_explicit_directory() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_config("project/release.toml", VALID_CONFIG)?;

  let output = run_relcheck(&dir.path, &["check", "project"])?;
  assert!(stdout_of(&output).contains("Configuration is valid"));

  Ok(())
}

//! Tests for the `init` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_init_creates_config() -> Result<()> {
  let dir = TestDir::new()?;

  run_relcheck(
    &dir.path,
    &["init", "--repository-url", "https://github.com/owner/repo.git"],
  )?;

  assert!(dir.file_exists("release.toml"));

  let config = dir.read_file("release.toml")?;
  assert!(config.contains("branches"));
  assert!(config.contains("repositoryUrl"));
  assert!(config.contains("@semantic-release/commit-analyzer"));

  Ok(())
}

#[test]
fn test_init_scaffold_passes_check() -> Result<()> {
  let dir = TestDir::new()?;

  run_relcheck(
    &dir.path,
    &["init", "--repository-url", "https://github.com/owner/repo.git"],
  )?;

  let output = run_relcheck(&dir.path, &["check"])?;
  assert!(stdout_of(&output).contains("Configuration is valid"));

  Ok(())
}

#[test]
fn test_init_without_url_needs_filling_in() -> Result<()> {
  let dir = TestDir::new()?;

  let output = run_relcheck(&dir.path, &["init"])?;
  assert!(stdout_of(&output).contains("fill in repositoryUrl"));

  // The scaffold is intentionally incomplete until the URL is set
  let check = relcheck_output(&dir.path, &["check"])?;
  assert_eq!(check.status.code(), Some(1));

  Ok(())
}

#[test]
fn test_init_does_not_overwrite_without_force() -> Result<()> {
  let dir = TestDir::new()?;

  run_relcheck(
    &dir.path,
    &["init", "--repository-url", "https://github.com/owner/first.git"],
  )?;
  let first = dir.read_file("release.toml")?;

  // stdin is closed in tests, so the overwrite prompt reads EOF and aborts
  let output = run_relcheck(
    &dir.path,
    &["init", "--repository-url", "https://github.com/owner/second.git"],
  )?;
  assert!(stdout_of(&output).contains("Aborted"));
  assert_eq!(dir.read_file("release.toml")?, first);

  Ok(())
}

#[test]
fn test_init_force_overwrites() -> Result<()> {
  let dir = TestDir::new()?;

  run_relcheck(
    &dir.path,
    &["init", "--repository-url", "https://github.com/owner/first.git"],
  )?;
  run_relcheck(
    &dir.path,
    &[
      "init",
      "--force",
      "--repository-url",
      "https://github.com/owner/second.git",
    ],
  )?;

  let config = dir.read_file("release.toml")?;
  assert!(config.contains("second.git"));

  Ok(())
}

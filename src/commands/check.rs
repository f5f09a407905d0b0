//! `relcheck check` - Validate the release configuration
//!
//! Finds the configuration file in the target directory, parses it, and
//! runs full schema validation. On success prints a summary of the
//! descriptor the engine would see; with `--json` emits a machine-readable
//! report for CI. Validation failures surface through the normal error
//! path and exit with code 1.

use crate::core::config::ReleaseConfig;
use crate::core::error::{ConfigError, RelError, RelResult};
use std::env;
use std::path::PathBuf;

/// Run the check command
pub fn run_check(dir: Option<PathBuf>, json: bool) -> RelResult<()> {
  let dir = match dir {
    Some(dir) => dir,
    None => env::current_dir()?,
  };

  let config_path = ReleaseConfig::find_config_path(&dir).ok_or_else(|| {
    RelError::Config(ConfigError::NotFound {
      dir: dir.to_path_buf(),
    })
  })?;

  let config = ReleaseConfig::load_file(&config_path)?;

  if json {
    let report = serde_json::json!({
      "path": config_path,
      "valid": true,
      "config": config.resolved(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    return Ok(());
  }

  println!("🔍 Checking {}", config_path.display());
  println!();
  display_summary(&config);
  println!();
  println!("✅ Configuration is valid");

  Ok(())
}

/// Display the descriptor the engine would see
fn display_summary(config: &ReleaseConfig) {
  let resolved = config.resolved();

  let names = resolved.branches.names();
  println!("Branches: {}", names.join(", "));
  println!("Repository: {}", resolved.repository_url);
  if let Some(ref tag_format) = resolved.tag_format {
    println!("Tag format: {}", tag_format);
  }
  if resolved.dry_run {
    println!("Dry run: enabled");
  }

  println!("\nPlugins ({}, in execution order):", resolved.plugins.len());
  for (index, name) in resolved.plugins.iter().enumerate() {
    println!("  {}. 🔌 {}", index + 1, name);
  }
}

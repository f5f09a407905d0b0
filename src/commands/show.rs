//! `relcheck show` - Print the resolved configuration
//!
//! Loads and validates the configuration, applies engine defaults, and
//! prints the descriptor. `--json` emits the wire shape (`branches`,
//! `repositoryUrl`, `plugins`, `tagFormat`, `dryRun`) exactly as the
//! engine consumes it.

use crate::core::branch::{BranchSpec, Branches, Prerelease};
use crate::core::config::ReleaseConfig;
use crate::core::error::RelResult;
use std::env;
use std::path::PathBuf;

/// Run the show command
pub fn run_show(dir: Option<PathBuf>, json: bool) -> RelResult<()> {
  let dir = match dir {
    Some(dir) => dir,
    None => env::current_dir()?,
  };

  let config = ReleaseConfig::load(&dir)?.resolved();

  if json {
    println!("{}", serde_json::to_string_pretty(&config)?);
    return Ok(());
  }

  println!("📋 Release configuration");
  println!("════════════════════════════════════════");
  println!();
  println!("Repository: {}", config.repository_url);
  if let Some(ref tag_format) = config.tag_format {
    println!("Tag format: {}", tag_format);
  }
  println!("Dry run: {}", if config.dry_run { "yes" } else { "no" });

  println!("\nBranches:");
  display_branches(&config.branches);

  println!("\nPlugins (in execution order):");
  for (index, name) in config.plugins.iter().enumerate() {
    println!("  {}. {}", index + 1, name);
  }

  Ok(())
}

fn display_branches(branches: &Branches) {
  match branches {
    Branches::One(name) => println!("  🌿 {}", name),
    Branches::Many(specs) => {
      for spec in specs {
        match spec {
          BranchSpec::Name(name) => println!("  🌿 {}", name),
          BranchSpec::Detailed(detail) => {
            let mut notes = Vec::new();
            if let Some(ref range) = detail.range {
              notes.push(format!("range {}", range));
            }
            if let Some(ref channel) = detail.channel {
              notes.push(format!("channel {}", channel));
            }
            match detail.prerelease {
              Some(Prerelease::Enabled(true)) => notes.push("prerelease".to_string()),
              Some(Prerelease::Identifier(ref id)) => notes.push(format!("prerelease {}", id)),
              _ => {}
            }

            if notes.is_empty() {
              println!("  🌿 {}", detail.name);
            } else {
              println!("  🌿 {} ({})", detail.name, notes.join(", "));
            }
          }
        }
      }
    }
  }
}

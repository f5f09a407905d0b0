//! `relcheck init` - Scaffold a starter release.toml

use anyhow::Context;
use std::env;
use std::io::{self, Write};

use crate::core::config::ReleaseConfig;
use crate::core::error::RelResult;
use crate::core::plugin::DEFAULT_PLUGINS;

/// Run the init command to scaffold a release configuration
pub fn run_init(repository_url: Option<String>, force: bool) -> RelResult<()> {
  let dir = env::current_dir()?;

  if ReleaseConfig::exists(&dir) && !force {
    print!("⚠️  Configuration already exists. Overwrite? [y/N]: ");
    io::stdout().flush()?;
    let mut response = String::new();
    io::stdin()
      .read_line(&mut response)
      .context("Failed to read response")?;
    if !response.trim().eq_ignore_ascii_case("y") {
      println!("Aborted.");
      return Ok(());
    }
  }

  let mut config = ReleaseConfig::default();
  let url_provided = repository_url.is_some();
  if let Some(url) = repository_url {
    config.repository_url = url;
  }

  println!("🔧 Scaffolding release configuration...");
  println!("   Branches: main");
  println!("   Plugins: {} (standard pipeline)", DEFAULT_PLUGINS.len());

  config.save(&dir)?;

  println!("\n✅ Configuration saved to: {}/release.toml", dir.display());
  println!("\n🚀 Next steps:");
  if !url_provided {
    println!("   1. Edit release.toml and fill in repositoryUrl");
    println!("      Example: repositoryUrl = \"https://github.com/owner/repo.git\"");
    println!("   2. Run: relcheck check");
  } else {
    println!("   1. Run: relcheck check");
  }

  Ok(())
}

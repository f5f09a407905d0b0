//! The release configuration descriptor
//!
//! `ReleaseConfig` is the immutable record the consuming release engine
//! reads once at startup: which branches to release from, the upstream
//! repository, and an ordered plugin pipeline. Serialized field names are
//! the engine's wire names (`repositoryUrl`, `tagFormat`, `dryRun`).
//!
//! Searched in order: release.toml, .release.toml, .releaserc.toml,
//! .releaserc.json, .config/release.toml

use crate::core::branch::Branches;
use crate::core::error::{ConfigError, RelError, RelResult, ResultExt};
use crate::core::plugin;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Tag format applied when the configuration does not override it
pub const DEFAULT_TAG_FORMAT: &str = "v${version}";

/// URL schemes the engine can fetch from
const ACCEPTED_SCHEMES: [&str; 8] = [
  "http",
  "https",
  "git",
  "ssh",
  "git+http",
  "git+https",
  "git+ssh",
  "file",
];

/// scp-like Git remote: `git@github.com:owner/repo.git`
static SCP_REMOTE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(?:[A-Za-z0-9._-]+@)?[A-Za-z0-9._-]+:[A-Za-z0-9._~/-]+$").expect("hard-coded pattern"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseConfig {
  /// Branches the engine releases from; order resolves channels
  #[serde(default)]
  pub branches: Branches,

  /// Upstream repository the engine pushes releases to
  #[serde(default)]
  pub repository_url: String,

  /// Plugin pipeline, executed in declared order
  #[serde(default = "plugin::default_plugins")]
  pub plugins: Vec<String>,

  /// Git tag template; resolved to `v${version}` when absent
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tag_format: Option<String>,

  /// When set, the engine skips publishing side effects
  #[serde(default)]
  pub dry_run: bool,
}

impl Default for ReleaseConfig {
  fn default() -> Self {
    Self {
      branches: Branches::One("main".to_string()),
      repository_url: String::new(),
      plugins: plugin::default_plugins(),
      tag_format: None,
      dry_run: false,
    }
  }
}

impl ReleaseConfig {
  /// Find the config file in search order:
  /// release.toml, .release.toml, .releaserc.toml, .releaserc.json, .config/release.toml
  pub fn find_config_path(dir: &Path) -> Option<PathBuf> {
    let candidates = vec![
      dir.join("release.toml"),
      dir.join(".release.toml"),
      dir.join(".releaserc.toml"),
      dir.join(".releaserc.json"),
      dir.join(".config").join("release.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load and validate the configuration from a directory
  pub fn load(dir: &Path) -> RelResult<Self> {
    let config_path = Self::find_config_path(dir).ok_or_else(|| {
      RelError::Config(ConfigError::NotFound {
        dir: dir.to_path_buf(),
      })
    })?;

    Self::load_file(&config_path)
  }

  /// Load and validate a specific configuration file
  pub fn load_file(path: &Path) -> RelResult<Self> {
    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config = if path.extension().is_some_and(|ext| ext == "json") {
      Self::parse_json(&content, &path.display().to_string())?
    } else {
      Self::parse_toml(&content, &path.display().to_string())?
    };

    config.validate()?;
    Ok(config)
  }

  /// Parse and validate a TOML document without touching the filesystem
  pub fn from_toml(content: &str) -> RelResult<Self> {
    let config = Self::parse_toml(content, "release configuration")?;
    config.validate()?;
    Ok(config)
  }

  /// Parse and validate a JSON document without touching the filesystem
  pub fn from_json(content: &str) -> RelResult<Self> {
    let config = Self::parse_json(content, "release configuration")?;
    config.validate()?;
    Ok(config)
  }

  fn parse_toml(content: &str, source: &str) -> RelResult<Self> {
    toml_edit::de::from_str(content).map_err(|e| {
      RelError::Config(ConfigError::Parse {
        source: source.to_string(),
        message: e.to_string(),
      })
    })
  }

  fn parse_json(content: &str, source: &str) -> RelResult<Self> {
    serde_json::from_str(content).map_err(|e| {
      RelError::Config(ConfigError::Parse {
        source: source.to_string(),
        message: e.to_string(),
      })
    })
  }

  /// Validate the descriptor against the schema
  ///
  /// Checked in declaration order: branches, repositoryUrl, tagFormat,
  /// plugins. The first violation is returned; load-time errors are fatal
  /// and there is nothing to retry.
  pub fn validate(&self) -> Result<(), ConfigError> {
    self.branches.validate()?;

    if self.repository_url.is_empty() {
      return Err(ConfigError::MissingField {
        field: "repositoryUrl".to_string(),
      });
    }
    validate_repository_url(&self.repository_url)?;

    if let Some(ref tag_format) = self.tag_format {
      validate_tag_format(tag_format)?;
    }

    plugin::validate_plugins(&self.plugins)?;

    Ok(())
  }

  /// Copy with engine defaults applied (`tagFormat` → `v${version}`)
  pub fn resolved(&self) -> Self {
    let mut config = self.clone();
    if config.tag_format.is_none() {
      config.tag_format = Some(DEFAULT_TAG_FORMAT.to_string());
    }
    config
  }

  /// Save config to release.toml (default location)
  pub fn save(&self, dir: &Path) -> RelResult<()> {
    let config_path = dir.join("release.toml");
    let content = toml_edit::ser::to_string_pretty(self).context("Failed to serialize config to TOML")?;
    fs::write(&config_path, content).with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    Ok(())
  }

  /// Check if a config exists at the given path
  pub fn exists(dir: &Path) -> bool {
    Self::find_config_path(dir).is_some()
  }
}

/// Check the repository URL: a scheme URL the engine can fetch, or an
/// scp-like Git remote
fn validate_repository_url(value: &str) -> Result<(), ConfigError> {
  match url::Url::parse(value) {
    Ok(parsed) if ACCEPTED_SCHEMES.contains(&parsed.scheme()) => Ok(()),
    Ok(_) => Err(ConfigError::InvalidUrl {
      value: value.to_string(),
    }),
    Err(_) if SCP_REMOTE.is_match(value) => Ok(()),
    Err(_) => Err(ConfigError::InvalidUrl {
      value: value.to_string(),
    }),
  }
}

/// The tag format must reference `${version}` exactly once
fn validate_tag_format(value: &str) -> Result<(), ConfigError> {
  if value.matches("${version}").count() != 1 {
    return Err(ConfigError::InvalidTagFormat {
      value: value.to_string(),
    });
  }
  Ok(())
}

//! Plugin identifier validation
//!
//! Plugins are opaque to this component: they are loaded and executed by
//! the consuming engine, in declared order. Here we only enforce that each
//! identifier is syntactically a resolvable npm-style package name and
//! that the list contains no duplicates.

use crate::core::error::ConfigError;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// npm package name: optional `@scope/` prefix, lowercase URL-safe name,
/// no leading `.` or `_` in either segment
static PLUGIN_NAME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(?:@[a-z0-9][a-z0-9._-]*/)?[a-z0-9][a-z0-9._-]*$").expect("hard-coded pattern"));

/// npm caps combined name length at 214 characters
const MAX_IDENTIFIER_LEN: usize = 214;

/// The pipeline the scaffolded configuration starts from, in execution order
pub const DEFAULT_PLUGINS: [&str; 4] = [
  "@semantic-release/commit-analyzer",
  "@semantic-release/release-notes-generator",
  "@semantic-release/git",
  "@semantic-release/github",
];

pub fn default_plugins() -> Vec<String> {
  DEFAULT_PLUGINS.iter().map(|s| s.to_string()).collect()
}

/// Check whether a plugin identifier is a syntactically valid npm name
pub fn is_valid_identifier(name: &str) -> bool {
  !name.is_empty() && name.len() <= MAX_IDENTIFIER_LEN && PLUGIN_NAME.is_match(name)
}

/// Validate a plugin list: entries present, resolvable, and unique
///
/// Order matters to the consuming engine, so the first offending entry
/// (by position) wins the report.
pub fn validate_plugins(plugins: &[String]) -> Result<(), ConfigError> {
  if plugins.is_empty() {
    return Err(ConfigError::MissingField {
      field: "plugins".to_string(),
    });
  }

  let mut seen = HashSet::new();
  for (index, name) in plugins.iter().enumerate() {
    if name.is_empty() {
      return Err(ConfigError::MissingField {
        field: format!("plugins[{}]", index),
      });
    }
    if !is_valid_identifier(name) {
      return Err(ConfigError::InvalidPlugin { name: name.clone() });
    }
    if !seen.insert(name.as_str()) {
      return Err(ConfigError::DuplicatePlugin { name: name.clone() });
    }
  }

  Ok(())
}

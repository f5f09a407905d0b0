//! Branch specifications for the release configuration
//!
//! `branches` accepts either a single branch name or an ordered list of
//! branch specs. A spec is a bare name or a detailed form with an optional
//! maintenance range, distribution channel, and prerelease marker. List
//! order is significant: the consuming engine resolves release channels
//! positionally.

use crate::core::error::ConfigError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Maintenance branch patterns: `1.x`, `1.x.x`, `1.2.x`
static MAINTENANCE_RANGE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(\d+)\.(?:x(?:\.x)?|(\d+)\.x)$").expect("hard-coded pattern"));

/// The `branches` field: one branch name, or an ordered list of specs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Branches {
  One(String),
  Many(Vec<BranchSpec>),
}

impl Default for Branches {
  fn default() -> Self {
    Branches::Many(Vec::new())
  }
}

/// A single entry in a branch list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BranchSpec {
  Name(String),
  Detailed(BranchDetail),
}

/// Detailed branch form: `{ name = "1.x", channel = "legacy" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchDetail {
  pub name: String,

  /// Explicit maintenance range (defaults to the name when it matches N.x)
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub range: Option<String>,

  /// Distribution channel the engine publishes this branch to
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub channel: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub prerelease: Option<Prerelease>,
}

/// Prerelease marker: `true` to derive from the branch name, or an
/// explicit semver prerelease identifier like `"beta"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prerelease {
  Enabled(bool),
  Identifier(String),
}

impl BranchSpec {
  /// Declared branch name
  pub fn name(&self) -> &str {
    match self {
      BranchSpec::Name(name) => name,
      BranchSpec::Detailed(detail) => &detail.name,
    }
  }

  fn validate(&self, index: usize) -> Result<(), ConfigError> {
    if self.name().is_empty() {
      return Err(ConfigError::MissingField {
        field: format!("branches[{}].name", index),
      });
    }

    if let BranchSpec::Detailed(detail) = self {
      if let Some(ref range) = detail.range
        && !is_maintenance_range(range)
      {
        return Err(ConfigError::InvalidBranchRange {
          branch: detail.name.clone(),
          range: range.clone(),
        });
      }

      if let Some(Prerelease::Identifier(ref id)) = detail.prerelease
        && (id.is_empty() || semver::Prerelease::new(id).is_err())
      {
        return Err(ConfigError::InvalidPrerelease {
          branch: detail.name.clone(),
          value: id.clone(),
        });
      }
    }

    Ok(())
  }
}

impl Branches {
  /// Declared branch names, in order
  pub fn names(&self) -> Vec<&str> {
    match self {
      Branches::One(name) => vec![name.as_str()],
      Branches::Many(specs) => specs.iter().map(BranchSpec::name).collect(),
    }
  }

  pub fn is_empty(&self) -> bool {
    match self {
      Branches::One(name) => name.is_empty(),
      Branches::Many(specs) => specs.is_empty(),
    }
  }

  /// Validate the branch specification
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.is_empty() {
      return Err(ConfigError::MissingField {
        field: "branches".to_string(),
      });
    }

    if let Branches::Many(specs) = self {
      for (index, spec) in specs.iter().enumerate() {
        spec.validate(index)?;
      }
    }

    Ok(())
  }
}

/// Check whether a string is a maintenance range (`1.x`, `1.x.x`, `1.2.x`)
///
/// Numeric components must parse as u64.
pub fn is_maintenance_range(value: &str) -> bool {
  let Some(captures) = MAINTENANCE_RANGE.captures(value) else {
    return false;
  };

  let major_ok = captures
    .get(1)
    .is_some_and(|m| m.as_str().parse::<u64>().is_ok());
  let minor_ok = match captures.get(2) {
    Some(m) => m.as_str().parse::<u64>().is_ok(),
    None => true,
  };

  major_ok && minor_ok
}

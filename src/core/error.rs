//! Error types for relcheck with contextual messages and exit codes
//!
//! This module provides a unified error type that categorizes errors and
//! provides contextual help messages to users. Configuration errors carry
//! the exact field or value that failed validation.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for relcheck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad config, invalid args, missing files)
  User = 1,
  /// System error (I/O, serialization)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for relcheck
#[derive(Debug)]
pub enum RelError {
  /// Configuration errors
  Config(ConfigError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl RelError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    RelError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    RelError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      RelError::Message { message, context, help } => RelError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      RelError::Config(_) => ExitCode::User,
      RelError::Io(_) => ExitCode::System,
      RelError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      RelError::Config(e) => e.help_message(),
      RelError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for RelError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RelError::Config(e) => write!(f, "{}", e),
      RelError::Io(e) => write!(f, "I/O error: {}", e),
      RelError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for RelError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      RelError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<ConfigError> for RelError {
  fn from(err: ConfigError) -> Self {
    RelError::Config(err)
  }
}

impl From<io::Error> for RelError {
  fn from(err: io::Error) -> Self {
    RelError::Io(err)
  }
}

impl From<String> for RelError {
  fn from(msg: String) -> Self {
    RelError::message(msg)
  }
}

impl From<&str> for RelError {
  fn from(msg: &str) -> Self {
    RelError::message(msg)
  }
}

impl From<toml_edit::ser::Error> for RelError {
  fn from(err: toml_edit::ser::Error) -> Self {
    RelError::message(format!("TOML serialization error: {}", err))
  }
}

impl From<serde_json::Error> for RelError {
  fn from(err: serde_json::Error) -> Self {
    RelError::message(format!("JSON error: {}", err))
  }
}

impl From<anyhow::Error> for RelError {
  fn from(err: anyhow::Error) -> Self {
    RelError::message(err.to_string())
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// No release configuration file found
  NotFound { dir: PathBuf },

  /// Configuration file could not be parsed
  Parse { source: String, message: String },

  /// Missing or empty required field
  MissingField { field: String },

  /// repositoryUrl is not a well-formed URL
  InvalidUrl { value: String },

  /// Plugin identifier is not valid npm-style syntax
  InvalidPlugin { name: String },

  /// The same plugin identifier appears twice
  DuplicatePlugin { name: String },

  /// Maintenance branch range does not match the N.x pattern
  InvalidBranchRange { branch: String, range: String },

  /// Prerelease identifier is not a valid semver prerelease
  InvalidPrerelease { branch: String, value: String },

  /// tagFormat does not reference `${version}` exactly once
  InvalidTagFormat { value: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => Some("Run `relcheck init` to scaffold a configuration file.".to_string()),
      ConfigError::InvalidUrl { .. } => Some(
        "Use a scheme URL (https://github.com/owner/repo.git) or an scp-like remote (git@github.com:owner/repo.git)."
          .to_string(),
      ),
      ConfigError::DuplicatePlugin { .. } => {
        Some("Remove the repeated entry; the engine runs each plugin once, in declared order.".to_string())
      }
      ConfigError::InvalidBranchRange { .. } => {
        Some("Maintenance ranges look like '1.x', '1.x.x', or '1.2.x'.".to_string())
      }
      ConfigError::InvalidTagFormat { .. } => {
        Some("The tag format must reference ${version} exactly once, e.g. 'v${version}'.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { dir } => {
        write!(
          f,
          "No release configuration found.\nSearched in: {}",
          dir.display()
        )
      }
      ConfigError::Parse { source, message } => {
        write!(f, "Failed to parse {}: {}", source, message)
      }
      ConfigError::MissingField { field } => {
        write!(f, "Missing required field in config: {}", field)
      }
      ConfigError::InvalidUrl { value } => {
        write!(f, "repositoryUrl is not a well-formed URL: '{}'", value)
      }
      ConfigError::InvalidPlugin { name } => {
        write!(f, "Invalid plugin identifier: '{}'", name)
      }
      ConfigError::DuplicatePlugin { name } => {
        write!(f, "Duplicate plugin identifier: '{}'", name)
      }
      ConfigError::InvalidBranchRange { branch, range } => {
        write!(f, "Branch '{}' has an invalid maintenance range: '{}'", branch, range)
      }
      ConfigError::InvalidPrerelease { branch, value } => {
        write!(f, "Branch '{}' has an invalid prerelease identifier: '{}'", branch, value)
      }
      ConfigError::InvalidTagFormat { value } => {
        write!(f, "Invalid tag format: '{}'", value)
      }
    }
  }
}

impl std::error::Error for ConfigError {}

/// Result type alias for relcheck
pub type RelResult<T> = Result<T, RelError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> RelResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> RelResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<RelError>,
{
  fn context(self, ctx: impl Into<String>) -> RelResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> RelResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &RelError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}

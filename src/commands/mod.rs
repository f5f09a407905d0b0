//! CLI commands for relcheck
//!
//! This module contains all user-facing command implementations:
//!
//! - **check**: load and validate the release configuration
//! - **show**: print the resolved configuration descriptor
//! - **init**: scaffold a starter release.toml
//!
//! All commands operate on a directory (default: the current directory)
//! and surface configuration errors through `RelError` with exit code 1.

pub mod check;
pub mod init;
pub mod show;

pub use check::run_check;
pub use init::run_init;
pub use show::run_show;

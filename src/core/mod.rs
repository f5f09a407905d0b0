//! Core building blocks for relcheck
//!
//! - **config**: the release configuration descriptor, loading and validation
//! - **branch**: branch specifications (names, maintenance ranges, prerelease)
//! - **plugin**: plugin identifier syntax and the default pipeline
//! - **error**: error types with contextual help messages

pub mod branch;
pub mod config;
pub mod error;
pub mod plugin;

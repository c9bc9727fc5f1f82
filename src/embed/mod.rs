//! Embedded static resources.

/// Starter `docsite.toml` written by `docsite init`.
pub const DEFAULT_CONFIG: &str = include_str!("docsite.toml");

/// Default config filename.
pub const CONFIG_FILE: &str = "docsite.toml";

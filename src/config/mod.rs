//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── head       # head = [...]
//! │   └── theme/     # [theme], [[theme.sidebar]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── export.rs      # Resolved view handed to the site generator
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Layout
//!
//! | Key                 | Purpose                                   |
//! |---------------------|-------------------------------------------|
//! | `title`             | Site title (required, non-empty)          |
//! | `description`       | Site description (required, non-empty)    |
//! | `head`              | Extra `<head>` elements                   |
//! | `[[theme.sidebar]]` | Sidebar navigation groups                 |

mod export;
pub mod section;
pub mod types;
mod util;

pub use export::{GroupExport, SiteExport};
pub use section::{
    HeadTag, ResolvedEntry, SidebarEntry, SidebarFault, SidebarGroup, SidebarIssue, ThemeConfig,
    sidebar_issues, validate_sidebar,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{expand_config_path, find_config_file, find_config_file_from};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsite.toml.
///
/// Built once by [`SiteConfig::load`] and passed by reference afterwards;
/// nothing mutates it after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Extra `<head>` elements, in declared order.
    #[serde(default)]
    pub head: Vec<HeadTag>,

    /// Theme settings (sidebar)
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    pub const TITLE: FieldPath = FieldPath::new("title");
    pub const DESCRIPTION: FieldPath = FieldPath::new("description");
    pub const HEAD: FieldPath = FieldPath::new("head");

    /// Load and fully validate a config file.
    ///
    /// Unknown fields are reported as warnings, or rejected when `strict`.
    /// Hints and warnings are printed; errors are returned all at once.
    pub fn load(path: &Path, strict: bool) -> Result<Self, ConfigError> {
        let config = Self::from_path(path, strict)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string.
    ///
    /// Unknown fields are ignored. No semantic validation.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, _) = Self::parse_with_ignored(content)?;
        Ok(config)
    }

    /// Read and parse a config file with unknown field detection.
    pub fn from_path(path: &Path, strict: bool) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            if strict {
                return Err(ConfigError::UnknownFields(ignored));
            }
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        crate::debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Serialize back to canonical TOML.
    ///
    /// Reloading the output yields an equal config.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Sidebar groups in declared order.
    pub fn sidebar(&self) -> &[SidebarGroup] {
        &self.theme.sidebar
    }

    /// Resolved view for the site generator.
    pub fn export(&self) -> SiteExport<'_> {
        SiteExport::new(self)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect all diagnostics without printing anything.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::TITLE,
                "site title is empty",
                "set title, e.g.: \"My Documentation\"",
            );
        }
        if self.description.trim().is_empty() {
            diag.error_with_hint(
                Self::DESCRIPTION,
                "site description is empty",
                "describe the site in one sentence",
            );
        }

        for (i, tag) in self.head.iter().enumerate() {
            tag.validate(&Self::HEAD.index(i), &mut diag);
        }

        self.theme.validate(&mut diag);
        diag
    }

    /// Validate configuration.
    ///
    /// Prints collected hints and warnings, then returns all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose();
        diag.print_hints_and_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `title`/`description` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

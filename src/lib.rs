//! docsite - loader and validator for documentation site configuration.
//!
//! Reads `docsite.toml` (site metadata, `<head>` tags and the sidebar
//! navigation tree) into an immutable [`SiteConfig`], validates it, and
//! exports a resolved view for the site generator.
//!
//! ```ignore
//! let config = SiteConfig::load(Path::new("docsite.toml"), false)?;
//! for group in config.sidebar() {
//!     for entry in &group.children {
//!         let resolved = entry.resolve();
//!     }
//! }
//! ```

pub mod config;
pub mod embed;
pub mod logger;
pub mod utils;

pub use config::{ConfigError, SiteConfig};

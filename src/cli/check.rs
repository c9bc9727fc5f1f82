//! `docsite check`: load, validate, summarize.

use anyhow::Result;
use docsite::{SiteConfig, debug, log, utils::plural_count};

/// Report a config that passed validation.
///
/// Loading already validated it; this only prints the summary.
pub fn check_config(config: &SiteConfig) -> Result<()> {
    for (i, group) in config.sidebar().iter().enumerate() {
        debug!("check"; "[{}] {} ({})", i, group.title, plural_count(group.children.len(), "entry"));
    }

    log!("check"; "{}", summary(config));
    Ok(())
}

/// One-line summary, e.g. `5 groups, 21 entries, 1 head tag`.
pub fn summary(config: &SiteConfig) -> String {
    format!(
        "{}, {}, {}",
        plural_count(config.sidebar().len(), "group"),
        plural_count(config.theme.entry_count(), "entry"),
        plural_count(config.head.len(), "head tag"),
    )
}

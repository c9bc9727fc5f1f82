//! `[theme]` section configuration.
//!
//! Holds the sidebar navigation tree.
//!
//! # Example
//!
//! ```toml
//! [[theme.sidebar]]
//! title = "Guide"
//! collapsable = false
//! children = [["/", "Introduction"], "/getting-started-production/"]
//!
//! [[theme.sidebar]]
//! title = "FAQ"
//! children = ["/faq-deletion/", "/faq-filter/"]
//! ```

mod sidebar;

pub use sidebar::{
    ResolvedEntry, SidebarEntry, SidebarFault, SidebarGroup, SidebarIssue, sidebar_issues,
    validate_sidebar,
};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme section configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Navigation groups in rendering order.
    pub sidebar: Vec<SidebarGroup>,
}

impl ThemeConfig {
    pub const SIDEBAR: FieldPath = FieldPath::new("theme.sidebar");

    /// Total number of sidebar links across all groups.
    pub fn entry_count(&self) -> usize {
        self.sidebar.iter().map(|group| group.children.len()).sum()
    }

    /// Collect sidebar diagnostics.
    ///
    /// # Checks
    /// - errors: every [`SidebarIssue`], empty labels
    /// - warnings: a route listed more than once
    /// - hints: a route not ending in `/`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for issue in sidebar_issues(&self.sidebar) {
            let group = Self::SIDEBAR.index(issue.group);
            match issue.entry {
                None => diag.error_with_hint(
                    group.field("title"),
                    issue.fault.to_string(),
                    "give every sidebar group a heading",
                ),
                Some(entry) => diag.error_with_hint(
                    group.field("children").index(entry),
                    issue.fault.to_string(),
                    "use a site-relative route such as \"/getting-started/\"",
                ),
            }
        }

        // first occurrence of each route
        let mut seen: FxHashMap<&str, FieldPath> = FxHashMap::default();

        for (g, group) in self.sidebar.iter().enumerate() {
            for (e, entry) in group.children.iter().enumerate() {
                let field = Self::SIDEBAR.index(g).field("children").index(e);
                let path = entry.path();

                if entry.label().is_some_and(|label| label.trim().is_empty()) {
                    diag.error_with_hint(
                        field.clone(),
                        format!("label for `{path}` is empty"),
                        "drop the label to let the site generator derive one",
                    );
                }

                if path.starts_with('/') && !path.ends_with('/') {
                    diag.hint(field.clone(), format!("route `{path}` does not end with `/`"));
                }

                if path.is_empty() {
                    continue;
                }
                if let Some(first) = seen.get(path) {
                    diag.warn(
                        field,
                        format!("route `{path}` already listed at {}", first.as_str()),
                    );
                } else {
                    seen.insert(path, field);
                }
            }
        }
    }
}

//! `[[theme.sidebar]]` navigation groups.
//!
//! # Example
//!
//! ```toml
//! [[theme.sidebar]]
//! title = "Guide"
//! collapsable = false
//! children = [
//!   ["/", "Introduction"],
//!   "/getting-started-production/",
//! ]
//! ```
//!
//! A child is either a bare route or a `[route, label]` pair. The shape is
//! decided once while parsing; use sites only ever see [`SidebarEntry`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ConfigError;

/// A titled section of the navigation holding an ordered list of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub title: String,

    /// Whether the group can be folded. Defaults to `true`.
    #[serde(default = "default_collapsable")]
    pub collapsable: bool,

    /// Links in rendering order.
    #[serde(default)]
    pub children: Vec<SidebarEntry>,
}

const fn default_collapsable() -> bool {
    true
}

impl SidebarGroup {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            collapsable: true,
            children: Vec::new(),
        }
    }

    pub fn collapsable(mut self, collapsable: bool) -> Self {
        self.collapsable = collapsable;
        self
    }

    pub fn child(mut self, entry: SidebarEntry) -> Self {
        self.children.push(entry);
        self
    }

    /// Routes of all children, in declared order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(SidebarEntry::path)
    }
}

// ============================================================================
// Sidebar Entry
// ============================================================================

/// One sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    untagged,
    expecting = "a sidebar entry as a \"/path/\" string or a [\"/path/\", \"Label\"] pair"
)]
pub enum SidebarEntry {
    /// Bare route; the site generator derives the label.
    PathOnly(String),
    /// Route with an explicit label.
    PathWithLabel(String, String),
}

impl SidebarEntry {
    pub fn path_only(path: impl Into<String>) -> Self {
        Self::PathOnly(path.into())
    }

    pub fn with_label(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self::PathWithLabel(path.into(), label.into())
    }

    #[inline]
    pub fn path(&self) -> &str {
        match self {
            Self::PathOnly(path) | Self::PathWithLabel(path, _) => path,
        }
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::PathOnly(_) => None,
            Self::PathWithLabel(_, label) => Some(label),
        }
    }

    /// Normalize to a uniform `{ path, label }` record.
    ///
    /// The path is passed through unchanged. `PathOnly` entries carry no
    /// label.
    pub fn resolve(&self) -> ResolvedEntry<'_> {
        ResolvedEntry {
            path: self.path(),
            label: self.label(),
        }
    }
}

/// Uniform view of a [`SidebarEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry<'a> {
    pub path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
}

// ============================================================================
// Validation
// ============================================================================

/// What is wrong with a sidebar group or entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarFault {
    EmptyTitle,
    EmptyPath,
    /// Route does not begin with `/`.
    NotRooted(String),
}

impl fmt::Display for SidebarFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => f.write_str("group title is empty"),
            Self::EmptyPath => f.write_str("path is empty"),
            Self::NotRooted(path) => write!(f, "path `{path}` must begin with `/`"),
        }
    }
}

/// A sidebar violation located by group index and, for entry faults, entry
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarIssue {
    pub group: usize,
    pub entry: Option<usize>,
    pub fault: SidebarFault,
}

impl fmt::Display for SidebarIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry {
            Some(entry) => write!(f, "group {}, entry {}: {}", self.group, entry, self.fault),
            None => write!(f, "group {}: {}", self.group, self.fault),
        }
    }
}

/// Every sidebar violation, in declaration order.
///
/// Checks that each group title is non-empty and each entry path is
/// non-empty and begins with `/`.
pub fn sidebar_issues(groups: &[SidebarGroup]) -> impl Iterator<Item = SidebarIssue> + '_ {
    groups.iter().enumerate().flat_map(|(g, group)| {
        let title = group.title.trim().is_empty().then_some(SidebarIssue {
            group: g,
            entry: None,
            fault: SidebarFault::EmptyTitle,
        });

        let entries = group
            .children
            .iter()
            .enumerate()
            .filter_map(move |(e, entry)| {
                check_path(entry.path()).map(|fault| SidebarIssue {
                    group: g,
                    entry: Some(e),
                    fault,
                })
            });

        title.into_iter().chain(entries)
    })
}

/// Fail on the first sidebar violation.
pub fn validate_sidebar(groups: &[SidebarGroup]) -> Result<(), ConfigError> {
    match sidebar_issues(groups).next() {
        Some(issue) => Err(ConfigError::InvalidSidebarEntry(issue)),
        None => Ok(()),
    }
}

fn check_path(path: &str) -> Option<SidebarFault> {
    if path.is_empty() {
        Some(SidebarFault::EmptyPath)
    } else if !path.starts_with('/') {
        Some(SidebarFault::NotRooted(path.to_string()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};

    fn guide() -> SidebarGroup {
        SidebarGroup::new("Guide")
            .collapsable(false)
            .child(SidebarEntry::with_label("/", "Introduction"))
            .child(SidebarEntry::path_only("/getting-started-production/"))
    }

    #[test]
    fn test_resolve_path_only() {
        let entry = SidebarEntry::path_only("/foo/");
        let resolved = entry.resolve();
        assert_eq!(resolved.path, "/foo/");
        assert_eq!(resolved.label, None);
    }

    #[test]
    fn test_resolve_path_with_label() {
        let entry = SidebarEntry::with_label("/foo/", "Foo");
        assert_eq!(
            entry.resolve(),
            ResolvedEntry {
                path: "/foo/",
                label: Some("Foo"),
            }
        );
    }

    #[test]
    fn test_resolve_keeps_raw_path() {
        // No trimming or slash normalization.
        let entry = SidebarEntry::path_only("/Schedules");
        assert_eq!(entry.resolve().path, "/Schedules");
    }

    #[test]
    fn test_parse_mixed_children() {
        let config = test_parse_config(
            r#"[[theme.sidebar]]
title = "Guide"
collapsable = false
children = [["/", "Introduction"], "/getting-started-production/", "/getting-started-advanced/"]
"#,
        );
        let group = &config.theme.sidebar[0];
        assert_eq!(group.title, "Guide");
        assert!(!group.collapsable);
        assert_eq!(
            group.children,
            vec![
                SidebarEntry::with_label("/", "Introduction"),
                SidebarEntry::path_only("/getting-started-production/"),
                SidebarEntry::path_only("/getting-started-advanced/"),
            ]
        );
    }

    #[test]
    fn test_group_defaults() {
        let config = test_parse_config("[[theme.sidebar]]\ntitle = \"FAQ\"");
        let group = &config.theme.sidebar[0];
        assert!(group.collapsable);
        assert!(group.children.is_empty());
    }

    #[test]
    fn test_malformed_entries() {
        let cases = [
            // three-element entry
            r#"children = [["/a/", "A", "extra"]]"#,
            // one-element entry
            r#"children = [["/a/"]]"#,
            // non-string label
            r#"children = [["/a/", 1]]"#,
            // table entry
            r#"children = [{ path = "/a/" }]"#,
            // children not a sequence
            r#"children = "/a/""#,
        ];
        for case in cases {
            let content = format!(
                "title = \"T\"\ndescription = \"D\"\n[[theme.sidebar]]\ntitle = \"G\"\n{case}"
            );
            let err = SiteConfig::from_str(&content).unwrap_err();
            assert!(
                matches!(err, ConfigError::Malformed(_)),
                "expected malformed for {case}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_missing_group_title_is_malformed() {
        let content = "title = \"T\"\ndescription = \"D\"\n[[theme.sidebar]]\nchildren = [\"/a/\"]";
        assert!(SiteConfig::from_str(content).unwrap_err().is_malformed());
    }

    #[test]
    fn test_validate_sidebar_ok() {
        assert!(validate_sidebar(&[guide()]).is_ok());
        assert!(validate_sidebar(&[]).is_ok());
    }

    #[test]
    fn test_validate_sidebar_empty_title() {
        let groups = [guide(), SidebarGroup::new("").child(SidebarEntry::path_only("/a/"))];
        let err = validate_sidebar(&groups).unwrap_err();
        let ConfigError::InvalidSidebarEntry(issue) = err else {
            panic!("expected InvalidSidebarEntry");
        };
        assert_eq!(issue.group, 1);
        assert_eq!(issue.entry, None);
        assert_eq!(issue.fault, SidebarFault::EmptyTitle);
    }

    #[test]
    fn test_validate_sidebar_blank_title() {
        let groups = [SidebarGroup::new("   ")];
        assert!(matches!(
            validate_sidebar(&groups),
            Err(ConfigError::InvalidSidebarEntry(SidebarIssue {
                group: 0,
                fault: SidebarFault::EmptyTitle,
                ..
            }))
        ));
    }

    #[test]
    fn test_validate_sidebar_bad_paths() {
        let groups = [
            guide(),
            SidebarGroup::new("Modules")
                .child(SidebarEntry::path_only("/department/"))
                .child(SidebarEntry::path_only(""))
                .child(SidebarEntry::with_label("customization/", "Custom")),
        ];

        let issues: Vec<_> = sidebar_issues(&groups).collect();
        assert_eq!(
            issues,
            vec![
                SidebarIssue {
                    group: 1,
                    entry: Some(1),
                    fault: SidebarFault::EmptyPath,
                },
                SidebarIssue {
                    group: 1,
                    entry: Some(2),
                    fault: SidebarFault::NotRooted("customization/".into()),
                },
            ]
        );

        // fail-fast reports the first one
        let err = validate_sidebar(&groups).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid sidebar entry: group 1, entry 1: path is empty"
        );
    }

    #[test]
    fn test_serialize_entries_keep_shape() {
        let value = serde_json::to_value(guide().children).unwrap();
        assert_eq!(
            value,
            serde_json::json!([["/", "Introduction"], "/getting-started-production/"])
        );
    }
}

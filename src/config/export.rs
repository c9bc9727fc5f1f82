//! Resolved view of a [`SiteConfig`] handed to the site generator.
//!
//! Sidebar entries are flattened to `{ path, label? }` records and head tags
//! to `{ tag, attrs }` tables, so consumers never inspect source shapes.

use serde::Serialize;

use super::{HeadTag, ResolvedEntry, SidebarGroup, SiteConfig, section::HeadTagExport};

#[derive(Debug, Clone, Serialize)]
pub struct SiteExport<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub head: Vec<HeadTagExport<'a>>,
    pub sidebar: Vec<GroupExport<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupExport<'a> {
    pub title: &'a str,
    pub collapsable: bool,
    pub children: Vec<ResolvedEntry<'a>>,
}

impl<'a> SiteExport<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            title: &config.title,
            description: &config.description,
            head: config.head.iter().map(HeadTag::export).collect(),
            sidebar: config.sidebar().iter().map(GroupExport::new).collect(),
        }
    }
}

impl<'a> GroupExport<'a> {
    pub fn new(group: &'a SidebarGroup) -> Self {
        Self {
            title: &group.title,
            collapsable: group.collapsable,
            children: group.children.iter().map(|entry| entry.resolve()).collect(),
        }
    }
}

//! Configuration section definitions.
//!
//! Each module corresponds to a part of `docsite.toml`:
//!
//! | Module  | TOML Key          | Purpose                         |
//! |---------|-------------------|---------------------------------|
//! | `head`  | `head`            | `<head>` tag declarations       |
//! | `theme` | `[theme]`         | Theme settings (sidebar)        |

mod head;
pub mod theme;

pub use head::{HeadTag, HeadTagExport};
pub use theme::{
    ResolvedEntry, SidebarEntry, SidebarFault, SidebarGroup, SidebarIssue, ThemeConfig,
    sidebar_issues, validate_sidebar,
};

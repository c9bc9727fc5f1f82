//! `docsite show`: print the resolved config for the site generator.

use anyhow::Result;
use docsite::SiteConfig;
use std::fmt::Write;

use super::common::write_output;
use super::{ShowArgs, ShowFormat};

pub fn show_config(config: &SiteConfig, args: &ShowArgs) -> Result<()> {
    let rendered = match args.format {
        ShowFormat::Json => render_json(config, args.pretty)?,
        ShowFormat::Tree => render_tree(config),
    };
    write_output(&rendered, args.output.as_deref(), "show")
}

/// Resolved descriptor as JSON, keys in declaration order.
pub fn render_json(config: &SiteConfig, pretty: bool) -> Result<String> {
    let export = config.export();
    let json = if pretty {
        serde_json::to_string_pretty(&export)?
    } else {
        serde_json::to_string(&export)?
    };
    Ok(json)
}

/// Indented outline of the sidebar.
///
/// ```text
/// Kitsu Documentation
/// Guide
///   /  Introduction
///   /getting-started-production/
/// ```
pub fn render_tree(config: &SiteConfig) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "{}", config.title);

    for group in config.sidebar() {
        let suffix = if group.collapsable { " (collapsable)" } else { "" };
        let _ = writeln!(out, "{}{suffix}", group.title);

        for entry in &group.children {
            let resolved = entry.resolve();
            let _ = match resolved.label {
                Some(label) => writeln!(out, "  {}  {label}", resolved.path),
                None => writeln!(out, "  {}", resolved.path),
            };
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsite::embed::DEFAULT_CONFIG;

    fn reference() -> SiteConfig {
        SiteConfig::from_str(DEFAULT_CONFIG).unwrap()
    }

    #[test]
    fn test_render_tree() {
        let tree = render_tree(&reference());
        let lines: Vec<_> = tree.lines().take(4).collect();
        assert_eq!(
            lines,
            [
                "Kitsu Documentation",
                "Guide",
                "  /  Introduction",
                "  /getting-started-production/",
            ]
        );
        assert!(tree.contains("\nOpen Source Setup\n  /installation/\n"));
        assert!(!tree.contains("(collapsable)"));
    }

    #[test]
    fn test_render_tree_collapsable_group() {
        let config = SiteConfig::from_str(
            "title = \"T\"\ndescription = \"D\"\n\
             [[theme.sidebar]]\ntitle = \"FAQ\"\nchildren = [\"/faq/\", [\"/faq-filter/\", \"Filters\"]]",
        )
        .unwrap();
        assert_eq!(
            render_tree(&config),
            "T\nFAQ (collapsable)\n  /faq/\n  /faq-filter/  Filters\n"
        );
    }

    #[test]
    fn test_render_json_round_trips_order() {
        let json = render_json(&reference(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let titles: Vec<_> = value["sidebar"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["title"].as_str().unwrap())
            .collect();
        assert_eq!(
            titles,
            ["Guide", "Modules", "Chat Integrations", "FAQ", "Open Source Setup"]
        );
        assert_eq!(
            value["sidebar"][0]["children"][0],
            serde_json::json!({ "path": "/", "label": "Introduction" })
        );
        assert_eq!(value["head"][0]["tag"], "link");
    }

    #[test]
    fn test_render_json_pretty() {
        let json = render_json(&reference(), true).unwrap();
        assert!(json.starts_with("{\n  \"title\": \"Kitsu Documentation\""));
    }
}

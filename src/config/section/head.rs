//! `head` declarations: extra elements injected into every page's `<head>`.
//!
//! # Example
//!
//! ```toml
//! head = [
//!   ["link", { rel = "shortcut icon", type = "image/x-icon", href = "./img/favicon.ico" }],
//!   { tag = "meta", attrs = { name = "theme-color", content = "#ffffff" } },
//! ]
//! ```

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::config::{ConfigDiagnostics, FieldPath};

/// A single `<head>` element declaration.
///
/// Written either as a `[tag, { attrs }]` pair or as a `{ tag, attrs }` table.
/// Always serialized back in the pair form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    /// Element name (e.g. `link`, `meta`).
    pub tag: String,
    /// Attribute name to value.
    pub attrs: BTreeMap<String, String>,
}

impl HeadTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Report empty tag or attribute names.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.tag.trim().is_empty() {
            diag.error_with_hint(
                field.clone(),
                "head tag name is empty",
                "use an element name such as \"link\" or \"meta\"",
            );
        }

        if self.attrs.keys().any(|name| name.trim().is_empty()) {
            diag.error(field.clone(), "head tag has an empty attribute name");
        }
    }

    /// Borrowed table-form view for export.
    pub fn export(&self) -> HeadTagExport<'_> {
        HeadTagExport {
            tag: &self.tag,
            attrs: &self.attrs,
        }
    }
}

/// Table-form view of a [`HeadTag`], as handed to the site generator.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeadTagExport<'a> {
    pub tag: &'a str,
    pub attrs: &'a BTreeMap<String, String>,
}

// ============================================================================
// Source representation
// ============================================================================

// Hand-written so unknown table keys go through `IgnoredAny` and reach the
// unknown-field report instead of being buffered away.
impl<'de> Deserialize<'de> for HeadTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(HeadTagVisitor)
    }
}

/// Always the `[tag, { attrs }]` pair.
impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.tag, &self.attrs).serialize(serializer)
    }
}

struct HeadTagVisitor;

impl<'de> Visitor<'de> for HeadTagVisitor {
    type Value = HeadTag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a head tag as a [tag, { attributes }] pair or a { tag, attrs } table")
    }

    /// `["link", { rel = "icon" }]`
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<HeadTag, A::Error> {
        let tag = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let attrs = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }
        Ok(HeadTag { tag, attrs })
    }

    /// `{ tag = "link", attrs = { rel = "icon" } }`
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<HeadTag, A::Error> {
        let mut tag: Option<String> = None;
        let mut attrs: Option<BTreeMap<String, String>> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "tag" => {
                    if tag.is_some() {
                        return Err(de::Error::duplicate_field("tag"));
                    }
                    tag = Some(map.next_value()?);
                }
                "attrs" => {
                    if attrs.is_some() {
                        return Err(de::Error::duplicate_field("attrs"));
                    }
                    attrs = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(HeadTag {
            tag: tag.ok_or_else(|| de::Error::missing_field("tag"))?,
            attrs: attrs.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, SiteConfig, test_parse_config};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.head.is_empty());
    }

    #[test]
    fn test_pair_form() {
        let config = test_parse_config(
            r#"head = [["link", { rel = "shortcut icon", type = "image/x-icon", href = "./img/favicon.ico" }]]"#,
        );
        assert_eq!(config.head.len(), 1);
        let link = &config.head[0];
        assert_eq!(link.tag, "link");
        assert_eq!(link.attr("rel"), Some("shortcut icon"));
        assert_eq!(link.attr("type"), Some("image/x-icon"));
        assert_eq!(link.attr("href"), Some("./img/favicon.ico"));
    }

    #[test]
    fn test_table_form_and_mixed_order() {
        let config = test_parse_config(
            r##"head = [
    { tag = "meta", attrs = { name = "theme-color", content = "#fff" } },
    ["link", { rel = "manifest", href = "/manifest.json" }],
    { tag = "noscript" },
]"##,
        );
        let tags: Vec<_> = config.head.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(tags, ["meta", "link", "noscript"]);
        assert_eq!(config.head[0].attr("content"), Some("#fff"));
        assert!(config.head[2].attrs.is_empty());
    }

    #[test]
    fn test_non_string_attribute_is_malformed() {
        let content = "title = \"T\"\ndescription = \"D\"\nhead = [[\"script\", { async = true }]]";
        let err = SiteConfig::from_str(content).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn test_head_not_a_sequence_is_malformed() {
        let content = "title = \"T\"\ndescription = \"D\"\nhead = \"favicon.ico\"";
        let err = SiteConfig::from_str(content).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_validate_empty_names() {
        let mut diag = ConfigDiagnostics::new();
        let tag = HeadTag::new("").with_attr("", "x");
        tag.validate(&FieldPath::new("head").index(0), &mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field.as_str(), "head[0]");
    }

    #[test]
    fn test_serializes_as_pair() {
        let tag = HeadTag::new("link").with_attr("rel", "icon");
        let value = serde_json::to_value(&tag).unwrap();
        assert_eq!(value, serde_json::json!(["link", { "rel": "icon" }]));

        let export = serde_json::to_value(tag.export()).unwrap();
        assert_eq!(
            export,
            serde_json::json!({ "tag": "link", "attrs": { "rel": "icon" } })
        );
    }

    #[test]
    fn test_malformed_pairs() {
        let cases = [
            r#"head = [["link"]]"#,
            r#"head = [["link", { rel = "icon" }, "extra"]]"#,
            r#"head = [{ attrs = { rel = "icon" } }]"#,
            r#"head = ["link"]"#,
        ];
        for case in cases {
            let content = format!("title = \"T\"\ndescription = \"D\"\n{case}");
            let err = SiteConfig::from_str(&content).unwrap_err();
            assert!(err.is_malformed(), "expected malformed for {case}, got {err:?}");
        }
    }

    #[test]
    fn test_table_form_unknown_key_reported() {
        let content = "title = \"T\"\ndescription = \"D\"\n\
                       head = [{ tag = \"meta\", atrs = { charset = \"utf-8\" } }]";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(ignored, ["head.0.atrs"]);
        assert!(config.head[0].attrs.is_empty());
    }

    #[test]
    fn test_strict_load_rejects_table_form_typo() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docsite.toml");
        fs::write(
            &path,
            "title = \"T\"\ndescription = \"D\"\n\
             head = [{ tag = \"meta\", atrs = { charset = \"utf-8\" } }]",
        )
        .unwrap();

        let err = SiteConfig::load(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFields(ref f) if f == &["head.0.atrs".to_string()]));
        assert!(SiteConfig::load(&path, false).is_ok());
    }
}

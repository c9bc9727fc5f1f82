//! Config field path used to locate diagnostics.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted/indexed location of a config value.
///
/// Static paths name whole fields (`title`, `head`), indexed paths point into
/// sequences (`theme.sidebar[1].children[3]`).
///
/// # Example
///
/// ```ignore
/// let group = FieldPath::new("theme.sidebar").index(1);
/// diag.error(group.field("title"), "group title is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Append a `[index]` segment.
    pub fn index(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{index}]", self.0)))
    }

    /// Append a `.name` segment.
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            return Self(Cow::Owned(name.to_string()));
        }
        Self(Cow::Owned(format!("{}.{name}", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("`{}`", self.0).bright_blue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_segments() {
        let path = FieldPath::new("theme.sidebar")
            .index(2)
            .field("children")
            .index(0);
        assert_eq!(path.as_str(), "theme.sidebar[2].children[0]");
    }

    #[test]
    fn test_display_quotes_path() {
        let path = FieldPath::new("theme.sidebar").index(0).field("title");
        assert!(path.to_string().contains("`theme.sidebar[0].title`"));
    }

    #[test]
    fn test_field_on_empty_root() {
        assert_eq!(FieldPath::new("").field("title").as_str(), "title");
    }
}

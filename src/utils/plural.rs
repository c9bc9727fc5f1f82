//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 groups)
/// - `plural_s(1)` -> `""` (1 group)
/// - `plural_s(5)` -> `"s"` (5 groups)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// Nouns ending in `y` take `ies`.
///
/// # Examples
///
/// - `plural_count(0, "group")` -> `"0 groups"`
/// - `plural_count(1, "group")` -> `"1 group"`
/// - `plural_count(21, "entry")` -> `"21 entries"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    if count != 1
        && let Some(stem) = noun.strip_suffix('y')
    {
        return format!("{count} {stem}ies");
    }
    format!("{} {}{}", count, noun, plural_s(count))
}

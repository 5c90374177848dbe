//! Extraction of environment variable names from source text.
//!
//! A line is only considered when it contains [`ENV_MARKER`]. The line is
//! split on every occurrence of the marker and each segment after the first
//! contributes the identifier that immediately follows the marker.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ENV_MARKER;

/// ASCII identifier run anchored at the start of a segment.
static ENV_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+").unwrap());

/// Extract every variable name referenced in `content`, in order of
/// appearance. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use envy::core::extract_names;
///
/// let names = extract_names("const url = process.env.DB_URL || process.env.FALLBACK;");
/// assert_eq!(names, vec!["DB_URL", "FALLBACK"]);
/// ```
pub fn extract_names(content: &str) -> Vec<String> {
    content.lines().flat_map(extract_line).collect()
}

/// Names referenced on a single line.
///
/// A marker followed by nothing or by a non-identifier character yields no
/// name (`process.env[key]`, `process.env.` at end of line).
pub fn extract_line(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(ENV_MARKER)
        .skip(1)
        .filter_map(|segment| ENV_NAME_REGEX.find(segment))
        .map(|m| m.as_str().to_string())
}

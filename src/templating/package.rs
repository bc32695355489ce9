//! Go package name derivation.
//!
//! The generated file's package is named after its directory, as Go expects.
//! Directory names that are not valid package identifiers (`my-icons`,
//! `Icons`, `type`) fall back to a fixed name.

use crate::constants::GO_KEYWORDS;
use crate::utils::fs::normalize_path;
use std::path::Path;

/// Whether `name` is usable as a Go package name.
///
/// Accepts `^[a-z][a-z0-9_]*$` excluding Go keywords.
///
/// ```
/// use templ_heroicons::templating::package::is_valid_go_package_name;
///
/// assert!(is_valid_go_package_name("heroicons"));
/// assert!(is_valid_go_package_name("icons_v2"));
/// assert!(!is_valid_go_package_name("my-icons"));
/// assert!(!is_valid_go_package_name("Icons"));
/// assert!(!is_valid_go_package_name("func"));
/// ```
#[must_use]
pub fn is_valid_go_package_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !GO_KEYWORDS.contains(&name)
}

/// Package name for files written to `dir`, or `fallback`.
///
/// Uses the last component of the lexically normalised path; no filesystem
/// access. Pass an absolute path so that `.` and `..` resolve to a real name.
#[must_use]
pub fn derive_package_name(dir: &Path, fallback: &str) -> String {
    normalize_path(dir)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| is_valid_go_package_name(name))
        .map_or_else(|| fallback.to_string(), str::to_string)
}

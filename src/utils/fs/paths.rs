//! Path normalisation helpers.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Lexically normalise a path, resolving `.` and `..` without touching the filesystem.
///
/// ```rust
/// use templ_heroicons::utils::fs::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize_path(Path::new("/foo/./bar/../baz")), PathBuf::from("/foo/baz"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                } else if !matches!(
                    components.last(),
                    Some(Component::RootDir | Component::Prefix(_))
                ) {
                    components.push(component);
                }
            }
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Resolve `path` against the current directory and normalise it.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;
    Ok(normalize_path(&absolute))
}

/// Whether `path` equals `base` or lies underneath it, compared component-wise.
#[must_use]
pub fn is_within(path: &Path, base: &Path) -> bool {
    normalize_path(path).starts_with(normalize_path(base))
}

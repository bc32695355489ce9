//! Atomic file write operations using a temp-and-rename strategy.

use crate::utils::fs::dirs::ensure_dir;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// The content goes to a sibling temporary file, is synced to disk, and is
/// then renamed over `path`. Concurrent readers see either the old file or the
/// complete new one. Missing parent directories are created.
///
/// The temporary file is created like any other file, so a new `path` gets the
/// usual umask-derived mode. When `path` already exists its permissions are
/// carried over to the replacement.
///
/// # Examples
///
/// ```rust,no_run
/// use templ_heroicons::utils::fs::atomic_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// atomic_write(Path::new("out/heroicons.templ"), b"package heroicons\n")?;
/// # Ok(())
/// # }
/// ```
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let temp_path = temp_path_for(path, parent);
    let existing_permissions = fs::metadata(path).ok().map(|m| m.permissions());

    let written = write_synced(&temp_path, content, existing_permissions);
    let result = written.and_then(|()| {
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp file to: {}", path.display()))
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn temp_path_for(path: &Path, parent: &Path) -> PathBuf {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    parent.join(format!(".{name}.{}.tmp", std::process::id()))
}

fn write_synced(
    temp_path: &Path,
    content: &[u8],
    permissions: Option<fs::Permissions>,
) -> Result<()> {
    let mut file = fs::File::create(temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    file.write_all(content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    if let Some(permissions) = permissions {
        file.set_permissions(permissions)
            .with_context(|| format!("Failed to set permissions on: {}", temp_path.display()))?;
    }

    file.sync_all().context("Failed to sync file to disk")?;
    Ok(())
}

//! Writing the generated document.
//!
//! The file is only touched when its content would change or when a write
//! is forced, so repeated runs leave the modification time alone. Dry runs
//! never touch the filesystem.

use crate::core::HeroiconsError;
use crate::utils::{atomic_write, ensure_dir};
use std::path::Path;
use tracing::{debug, warn};

/// What the writer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Dry run; nothing written.
    Previewed,
    /// Existing file already had this content.
    Unchanged,
    /// The file did not exist and was written.
    Created,
    /// The file existed and was replaced.
    Updated,
}

impl WriteOutcome {
    /// Whether the file on disk was modified.
    #[must_use]
    pub const fn wrote(self) -> bool {
        matches!(self, Self::Created | Self::Updated)
    }
}

/// Write behaviour flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Replace the file even if it is identical.
    pub force: bool,
    /// Report only; never write.
    pub dry_run: bool,
}

/// Write `content` to `path` according to `options`.
///
/// The comparison is byte-for-byte. An existing file that cannot be read is
/// overwritten. Parent directories are created as needed.
pub fn write_output(
    path: &Path,
    content: &str,
    options: WriteOptions,
) -> Result<WriteOutcome, HeroiconsError> {
    if options.dry_run {
        debug!("Dry run, not writing {}", path.display());
        return Ok(WriteOutcome::Previewed);
    }

    let exists = path.exists();
    if exists && !options.force {
        match std::fs::read(path) {
            Ok(existing) if existing == content.as_bytes() => {
                debug!("{} is up to date", path.display());
                return Ok(WriteOutcome::Unchanged);
            }
            Ok(_) => debug!("{} differs, rewriting", path.display()),
            Err(e) => warn!("Cannot read {} for comparison: {}; overwriting", path.display(), e),
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent).map_err(|e| HeroiconsError::OutputDirError {
            path: parent.display().to_string(),
            reason: format!("{e:#}"),
        })?;
    }

    atomic_write(path, content.as_bytes()).map_err(|e| HeroiconsError::WriteError {
        path: path.display().to_string(),
        reason: format!("{e:#}"),
    })?;

    Ok(if exists {
        WriteOutcome::Updated
    } else {
        WriteOutcome::Created
    })
}

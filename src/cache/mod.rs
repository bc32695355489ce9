//! Content-addressed cache for downloaded SVG assets.
//!
//! Each asset is stored under the SHA-256 of its URL:
//!
//! ```text
//! .heroicons_cache/
//! ├── 3f1c…9a.svg    # sha256("…/outline/bars-3.svg")
//! └── b07e…21.svg    # sha256("…/solid/bars-3.svg")
//! ```
//!
//! The same URL always maps to the same file and a hit is trusted as-is:
//! there is no expiry and no revalidation. Removing the directory is the only
//! way to invalidate it. Bytes are stored exactly as downloaded.
//!
//! Cache problems never fail a run. A directory that cannot be created
//! disables caching, an unreadable entry falls through to a download, and a
//! failed write only loses the cached copy.

pub mod fetcher;

pub use fetcher::{AssetFetcher, AssetOrigin, CachedAsset, FetchError};

use crate::utils::atomic_write;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Flat directory of cached assets keyed by URL hash.
#[derive(Debug, Clone)]
pub struct AssetCache {
    dir: Option<PathBuf>,
}

impl AssetCache {
    /// Open the cache at `dir`, creating it if needed.
    ///
    /// If the directory cannot be created the cache is disabled for the run.
    pub async fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        match tokio::fs::create_dir_all(&dir).await {
            Ok(()) => {
                debug!("Using asset cache at {}", dir.display());
                Self { dir: Some(dir) }
            }
            Err(e) => {
                warn!("Cannot create cache directory {}: {}; caching disabled", dir.display(), e);
                Self::disabled()
            }
        }
    }

    /// A cache that stores nothing.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { dir: None }
    }

    /// Whether entries are read and written.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.dir.is_some()
    }

    /// Cache directory, if enabled.
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Lower-case hex SHA-256 of the URL.
    ///
    /// ```
    /// use templ_heroicons::cache::AssetCache;
    ///
    /// let key = AssetCache::key_for("https://example.com/outline/bars-3.svg");
    /// assert_eq!(key.len(), 64);
    /// assert_eq!(key, AssetCache::key_for("https://example.com/outline/bars-3.svg"));
    /// ```
    #[must_use]
    pub fn key_for(url: &str) -> String {
        hex::encode(Sha256::digest(url.as_bytes()))
    }

    /// File that holds (or would hold) the asset for `url`.
    #[must_use]
    pub fn path_for(&self, url: &str) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(format!("{}.svg", Self::key_for(url))))
    }

    /// Cached bytes for `url`, if present and readable.
    pub async fn get(&self, url: &str) -> Option<Vec<u8>> {
        let path = self.path_for(url)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                debug!("Cache hit for {} ({})", url, path.display());
                Some(bytes)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Cannot read cached asset {}: {}; downloading again", path.display(), e);
                None
            }
        }
    }

    /// Store `bytes` for `url`. Failures are logged and otherwise ignored.
    pub async fn put(&self, url: &str, bytes: &[u8]) {
        let Some(path) = self.path_for(url) else {
            return;
        };
        let data = bytes.to_vec();
        let target = path.clone();
        let result = tokio::task::spawn_blocking(move || atomic_write(&target, &data)).await;
        match result {
            Ok(Ok(())) => debug!("Cached {} at {}", url, path.display()),
            Ok(Err(e)) => warn!("Cannot write cache entry {}: {:#}", path.display(), e),
            Err(e) => warn!("Cache write task for {} failed: {}", path.display(), e),
        }
    }
}

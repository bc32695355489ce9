//! Fixtures: SVG assets, catalog listings and source trees.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// `outline/bars-3.svg` as published upstream.
pub const OUTLINE_BARS_3: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" aria-hidden="true" data-slot="icon">
  <path stroke-linecap="round" stroke-linejoin="round" d="M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5"/>
</svg>
"#;

/// `solid/bars-3.svg` as published upstream.
pub const SOLID_BARS_3: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true" data-slot="icon">
  <path fill-rule="evenodd" d="M3 6.75A.75.75 0 0 1 3.75 6h16.5a.75.75 0 0 1 0 1.5H3.75A.75.75 0 0 1 3 6.75ZM3 12a.75.75 0 0 1 .75-.75h16.5a.75.75 0 0 1 0 1.5H3.75A.75.75 0 0 1 3 12Zm0 5.25a.75.75 0 0 1 .75-.75h16.5a.75.75 0 0 1 0 1.5H3.75a.75.75 0 0 1-.75-.75Z" clip-rule="evenodd"/>
</svg>
"#;

/// `outline/x-mark.svg` as published upstream.
pub const OUTLINE_X_MARK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" aria-hidden="true" data-slot="icon">
  <path stroke-linecap="round" stroke-linejoin="round" d="M6 18 18 6M6 6l12 12"/>
</svg>
"#;

/// An SVG with an unclosed element.
pub const BROKEN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"></svg>"#;

/// A directory-listing response naming `names` as SVG files.
pub fn listing_json(names: &[&str]) -> serde_json::Value {
    serde_json::Value::Array(
        names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "name": format!("{name}.svg"),
                    "path": format!("optimized/24/{name}.svg"),
                    "type": "file",
                })
            })
            .collect(),
    )
}

/// A temporary project directory holding templ sources.
pub struct SourceTree {
    temp: TempDir,
}

impl SourceTree {
    /// Create an empty tree.
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: TempDir::new().context("Failed to create temp dir")?,
        })
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn add_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Read a file from the tree.
    pub fn read(&self, relative: &str) -> Result<String> {
        let path = self.temp.path().join(relative);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

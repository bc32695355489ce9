//! Filesystem and terminal utilities.
//!
//! - [`fs`] - Atomic writes, directory creation and path normalisation
//! - [`progress`] - Download progress bar
//!
//! # Example
//!
//! ```rust,no_run
//! use templ_heroicons::utils::{atomic_write, ensure_dir};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("components/heroicons"))?;
//! atomic_write(Path::new("components/heroicons/heroicons.templ"), b"package heroicons\n")?;
//! # Ok(())
//! # }
//! ```

pub mod fs;
pub mod progress;

pub use fs::{absolute_path, atomic_write, ensure_dir, normalize_path};
pub use progress::ProgressBar;

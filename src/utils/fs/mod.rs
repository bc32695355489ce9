//! File system helpers for the cache and the output writer.
//!
//! - [`atomic`]: write-then-rename so readers never observe a half-written file
//! - [`dirs`]: directory creation with readable errors
//! - [`paths`]: lexical path normalisation and subtree checks
//!
//! # Examples
//!
//! ```rust,no_run
//! use templ_heroicons::utils::fs::{atomic_write, ensure_dir};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("components/heroicons"))?;
//! atomic_write(Path::new("components/heroicons/heroicons.templ"), b"package heroicons\n")?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod dirs;
pub mod paths;

pub use atomic::atomic_write;
pub use dirs::ensure_dir;
pub use paths::{absolute_path, is_within, normalize_path};

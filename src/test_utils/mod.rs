//! Test utilities for templ-heroicons
//!
//! Shared by unit tests and, through the `test-utils` feature, by the
//! integration suite:
//! - Logging setup that works with the test harness
//! - SVG assets shaped like the upstream 24px icons
//! - A throwaway source tree with templ files
//!
//! # Example
//!
//! ```rust,no_run
//! use templ_heroicons::test_utils::{SourceTree, init_test_logging};
//!
//! init_test_logging(None);
//! let tree = SourceTree::new().unwrap();
//! tree.add_file("views/nav.templ", "@heroicons.Outline_bars_3").unwrap();
//! ```

pub mod fixtures;

pub use fixtures::{
    BROKEN_SVG, OUTLINE_BARS_3, OUTLINE_X_MARK, SOLID_BARS_3, SourceTree, listing_json,
};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests, once per process.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=templ_heroicons=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

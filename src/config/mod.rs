//! Generator configuration.
//!
//! Settings are layered: built-in defaults from [`crate::constants`], then an
//! optional TOML file, then command-line flags (applied by the CLI). Every
//! field in the file is optional.
//!
//! # Locating the file
//!
//! 1. `--config <path>` or `TEMPL_HEROICONS_CONFIG`: must exist
//! 2. `templ-heroicons.toml` in the working directory: used when present
//! 3. otherwise defaults only
//!
//! # Example
//!
//! ```toml
//! version = "v2.2.0"
//! default_class = "size-5 shrink-0"
//! cache_dir = ".cache/heroicons"
//! extensions = ["templ"]
//! timeout_secs = 30
//!
//! [svg_attributes]
//! aria-hidden = "true"
//! data-slot = "icon"
//! ```

pub mod parser;

use crate::constants::{
    DEFAULT_CACHE_DIR, DEFAULT_CONFIG_FILE, DEFAULT_EXTENSIONS, DEFAULT_FALLBACK_PACKAGE,
    DEFAULT_MAX_PARALLEL, DEFAULT_NAMESPACE, DEFAULT_SVG_CLASS, DEFAULT_TIMEOUT_SECS,
    DEFAULT_TOKEN_ENV, HEROICONS_BASE_URL, HEROICONS_LIST_URL, HEROICONS_VERSION,
    OUTPUT_FILENAME,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub use parser::parse_config;

/// All tunable settings of a generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Git branch or tag of the icon repository (`{version}` in `asset_base_url`).
    pub version: String,

    /// Asset URL template; `{version}` is substituted.
    pub asset_base_url: String,

    /// Directory-listing endpoint used for catalog validation.
    pub list_url: String,

    /// Namespace token preceding icon references (`@heroicons.`).
    pub namespace: String,

    /// CSS class placed on every generated `<svg>`.
    pub default_class: String,

    /// Directory holding cached SVG assets.
    pub cache_dir: PathBuf,

    /// File name of the generated document inside the output directory.
    pub output_file: String,

    /// Source file extensions to scan, without the leading dot.
    pub extensions: Vec<String>,

    /// Per-request HTTP timeout in seconds.
    pub timeout_secs: u64,

    /// Environment variable holding the catalog bearer token.
    pub token_env: String,

    /// Package name used when the output directory name is not a valid Go identifier.
    pub fallback_package: String,

    /// Whether to validate references against the remote catalog.
    pub validate: bool,

    /// Maximum number of icons fetched concurrently.
    pub max_parallel: usize,

    /// Extra attributes for the root `<svg>`; they replace built-in attributes of the same name.
    pub svg_attributes: BTreeMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: HEROICONS_VERSION.to_string(),
            asset_base_url: HEROICONS_BASE_URL.to_string(),
            list_url: HEROICONS_LIST_URL.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            default_class: DEFAULT_SVG_CLASS.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            output_file: OUTPUT_FILENAME.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            fallback_package: DEFAULT_FALLBACK_PACKAGE.to_string(),
            validate: true,
            max_parallel: DEFAULT_MAX_PARALLEL,
            svg_attributes: BTreeMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from `path`, or from the default file if it exists.
    ///
    /// An explicit path must exist. The default `templ-heroicons.toml` in the
    /// working directory is optional.
    pub fn load_with_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load_from(default)
                } else {
                    debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        parse_config(path)
    }

    /// Asset base URL with the version tag substituted.
    ///
    /// ```
    /// use templ_heroicons::config::GeneratorConfig;
    ///
    /// let config = GeneratorConfig { version: "v2.1.5".into(), ..Default::default() };
    /// assert!(config.resolved_asset_base_url().contains("/v2.1.5/optimized/24"));
    /// ```
    #[must_use]
    pub fn resolved_asset_base_url(&self) -> String {
        self.asset_base_url
            .replace("{version}", &self.version)
            .trim_end_matches('/')
            .to_string()
    }

    /// Listing URL without a trailing slash.
    #[must_use]
    pub fn resolved_list_url(&self) -> String {
        self.list_url.trim_end_matches('/').to_string()
    }

    /// HTTP timeout applied to every request.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Bearer token from the configured environment variable, if set and non-empty.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Concurrency limit, never below one.
    #[must_use]
    pub fn effective_max_parallel(&self) -> usize {
        self.max_parallel.max(1)
    }
}

//! Command-line interface for templ-heroicons.
//!
//! A single command: scan, fetch, render and write.
//!
//! ```bash
//! templ-heroicons                                   # scan ., write ./components/heroicons/heroicons.templ
//! templ-heroicons -i web -o web/components/icons    # custom directories
//! templ-heroicons --dry-run                         # print the document instead of writing it
//! templ-heroicons --force --default-class "size-5"  # rewrite with a different class
//! ```
//!
//! Settings are resolved in this order, later winning:
//! 1. Built-in defaults
//! 2. The configuration file (`--config`, `TEMPL_HEROICONS_CONFIG` or `./templ-heroicons.toml`)
//! 3. Command-line flags

use crate::config::GeneratorConfig;
use crate::constants::{CONFIG_ENV, DEFAULT_OUTPUT_DIR};
use crate::generator::{GenerateOptions, Generator};
use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Process-level settings derived from the flags: logging and progress output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Default log filter, used when `RUST_LOG` is not set.
    pub log_level: Option<String>,

    /// Whether progress bars are suppressed.
    pub no_progress: bool,

    /// Configuration file named on the command line or in the environment.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global `tracing` subscriber, writing to stderr.
    ///
    /// `RUST_LOG` takes precedence over [`Self::log_level`].
    pub fn init_logging(&self) {
        let default_level = self.log_level.as_deref().unwrap_or("warn");
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Generate templ components for the Heroicons referenced in a project.
#[derive(Parser, Debug)]
#[command(
    name = "templ-heroicons",
    about = "Generate templ components for the Heroicons used in your project",
    version,
    long_about = "Scans .templ and .go files for @heroicons.<Style>_<name> references, downloads \
                  the matching SVGs (with a local cache) and writes one heroicons.templ file \
                  containing a component per icon."
)]
pub struct Cli {
    /// Root directory to scan for icon references.
    #[arg(short, long, default_value = ".")]
    input_dir: PathBuf,

    /// Directory for the generated heroicons.templ file.
    ///
    /// Its name becomes the Go package name when it is a valid identifier.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Rewrite the output file even if its content is unchanged.
    #[arg(short, long)]
    force: bool,

    /// Skip the output directory while scanning (true/false).
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    exclude_output: bool,

    /// Show debug output.
    #[arg(short, long)]
    verbose: bool,

    /// Only print errors.
    #[arg(short, long, visible_alias = "silent", conflicts_with = "verbose")]
    quiet: bool,

    /// Print the generated file instead of writing it.
    #[arg(long)]
    dry_run: bool,

    /// CSS class on every generated <svg> [default: size-6].
    #[arg(long, value_name = "CLASS")]
    default_class: Option<String>,

    /// Directory for cached SVG downloads [default: ./.heroicons_cache].
    #[arg(long, value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    /// Configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of concurrent downloads [default: 8].
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    max_parallel: Option<u16>,

    /// Disable the download progress bar.
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    /// Run with settings derived from the parsed flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the flags into process-level settings.
    ///
    /// ```rust
    /// use clap::Parser;
    /// use templ_heroicons::cli::Cli;
    ///
    /// let cli = Cli::parse_from(["templ-heroicons", "--verbose"]);
    /// assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
            no_progress: self.no_progress || self.verbose || self.quiet,
            config_path: self.config.clone(),
        }
    }

    /// Merge the configuration file with flag overrides.
    pub fn generator_config(&self, config: &CliConfig) -> Result<GeneratorConfig> {
        let mut generator = GeneratorConfig::load_with_optional(config.config_path.as_deref())?;

        if let Some(class) = &self.default_class {
            generator.default_class.clone_from(class);
        }
        if let Some(dir) = &self.cache_dir {
            generator.cache_dir.clone_from(dir);
        }
        if let Some(max) = self.max_parallel {
            generator.max_parallel = usize::from(max);
        }
        Ok(generator)
    }

    /// Run with explicit process-level settings.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        let generator_config = self.generator_config(&config)?;
        let token = generator_config.token();

        let options = GenerateOptions {
            input_dir: self.input_dir,
            output_dir: self.output_dir,
            force: self.force,
            dry_run: self.dry_run,
            exclude_output: self.exclude_output,
            quiet: self.quiet,
            show_progress: !config.no_progress,
            token,
        };

        Generator::new(generator_config).run(&options).await?;
        Ok(())
    }
}

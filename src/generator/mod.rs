//! Pipeline orchestration.
//!
//! A run goes through these stages in order:
//!
//! 1. Setup: the input root must exist and the output directory must be creatable
//! 2. Scan the input tree for references
//! 3. Validate against the remote catalog (optional, degrades to a warning)
//! 4. Fetch and parse every icon, `max_parallel` at a time
//! 5. Render the document, sorted by (style, name)
//! 6. Write it, or preview it on a dry run
//!
//! Per-icon problems drop that icon and are reported. Only setup errors, a
//! run where every referenced icon failed, and render or write errors abort.

use crate::cache::{AssetCache, AssetFetcher, FetchError};
use crate::catalog::{CatalogClient, CatalogStatus, Validation};
use crate::config::GeneratorConfig;
use crate::core::HeroiconsError;
use crate::icon::IconRequest;
use crate::output::{WriteOptions, WriteOutcome, write_output};
use crate::scanner::{ScanOptions, ScanReport, scan_directory};
use crate::svg::{SvgError, extract_elements};
use crate::templating::{ComponentRenderer, RenderConfig, ResolvedIcon, derive_package_name};
use crate::utils::{ProgressBar, absolute_path, ensure_dir};
use anyhow::{Context, Result};
use colored::Colorize;
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a single icon was left out of the document.
#[derive(Error, Debug)]
pub enum IconError {
    /// Download failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The asset is not a usable SVG.
    #[error("failed to parse {icon} from {url}: {source}")]
    Parse {
        /// Icon being parsed
        icon: IconRequest,
        /// Where the asset came from
        url: String,
        /// Extractor error
        #[source]
        source: SvgError,
    },
}

impl IconError {
    /// The icon that failed.
    #[must_use]
    pub const fn icon(&self) -> &IconRequest {
        match self {
            Self::Fetch(e) => e.icon(),
            Self::Parse { icon, .. } => icon,
        }
    }
}

/// Inputs of a single run that do not come from the configuration file.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root of the source tree to scan
    pub input_dir: PathBuf,
    /// Directory receiving the generated file
    pub output_dir: PathBuf,
    /// Rewrite the file even when unchanged
    pub force: bool,
    /// Print the document instead of writing it
    pub dry_run: bool,
    /// Skip `output_dir` while scanning
    pub exclude_output: bool,
    /// Suppress user-facing messages
    pub quiet: bool,
    /// Draw a download progress bar
    pub show_progress: bool,
    /// Bearer token for the catalog
    pub token: Option<String>,
}

impl GenerateOptions {
    /// Options for scanning `input_dir` into `output_dir` with default flags.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            force: false,
            dry_run: false,
            exclude_output: true,
            quiet: false,
            show_progress: false,
            token: None,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct GenerationReport {
    /// Scanner results
    pub scan: ScanReport,
    /// Whether catalog validation ran
    pub catalog_available: bool,
    /// Icons absent from the catalog, with suggestions
    pub unknown: Vec<(IconRequest, Vec<String>)>,
    /// Icons rendered, in document order
    pub resolved: Vec<IconRequest>,
    /// Icons left out
    pub failures: Vec<IconError>,
    /// Package clause of the document
    pub package_name: String,
    /// Path of the generated file
    pub output_path: PathBuf,
    /// What happened to the file
    pub outcome: WriteOutcome,
    /// The rendered document
    pub document: String,
}

/// Runs the pipeline with one configuration.
pub struct Generator {
    config: GeneratorConfig,
    renderer: ComponentRenderer,
}

impl Generator {
    /// Create a generator for `config`.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            renderer: ComponentRenderer::new(),
        }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Execute every stage and write (or preview) the document.
    pub async fn run(&mut self, options: &GenerateOptions) -> Result<GenerationReport> {
        let say = |message: String| {
            if !options.quiet {
                println!("{message}");
            }
        };

        // Setup
        if !options.input_dir.is_dir() {
            return Err(HeroiconsError::InputDirNotFound {
                path: options.input_dir.display().to_string(),
            }
            .into());
        }
        let output_dir = absolute_path(&options.output_dir)?;
        if !options.dry_run {
            ensure_dir(&output_dir).map_err(|e| HeroiconsError::OutputDirError {
                path: output_dir.display().to_string(),
                reason: format!("{e:#}"),
            })?;
        }
        let output_path = output_dir.join(&self.config.output_file);

        // Scan
        say(format!("Scanning {} for icon references...", options.input_dir.display()));
        let scan_options = ScanOptions {
            namespace: self.config.namespace.clone(),
            extensions: self.config.extensions.clone(),
            exclude_dir: options.exclude_output.then(|| output_dir.clone()),
        };
        let scan = scan_directory(&options.input_dir, &scan_options)?;
        info!(
            "Scanned {} file(s), {} reference(s), {} icon(s)",
            scan.files_scanned,
            scan.total_references,
            scan.icons.len()
        );
        for failure in &scan.failed_files {
            say(format!(
                "  {} skipped {}: {}",
                "⚠".yellow(),
                failure.path.display(),
                failure.reason
            ));
        }
        if scan.is_empty() {
            say("No icon references found.".to_string());
        } else {
            say(format!(
                "Found {} unique icon(s) in {} file(s)",
                scan.icons.len(),
                scan.files_scanned
            ));
        }

        let client = AssetFetcher::http_client(self.config.request_timeout())
            .context("Failed to create HTTP client")?;

        // Validate
        let mut catalog_available = false;
        let mut unknown = Vec::new();
        if !scan.is_empty() && self.config.validate {
            let catalog = CatalogClient::new(
                client.clone(),
                self.config.resolved_list_url(),
                options.token.clone(),
            );
            match catalog.fetch().await {
                CatalogStatus::Unavailable { reason } => {
                    warn!("Icon catalog unavailable ({}); skipping validation", reason);
                }
                status @ CatalogStatus::Available(_) => {
                    catalog_available = true;
                    for icon in &scan.icons {
                        if let Validation::Unknown { suggestions } = status.validate(icon) {
                            if suggestions.is_empty() {
                                warn!("Icon {} is not in the catalog", icon);
                            } else {
                                warn!(
                                    "Icon {} is not in the catalog (did you mean: {}?)",
                                    icon,
                                    suggestions.join(", ")
                                );
                            }
                            unknown.push((icon.clone(), suggestions));
                        }
                    }
                }
            }
        } else if !self.config.validate {
            debug!("Catalog validation disabled");
        }

        // Fetch and parse
        let cache = AssetCache::open(&self.config.cache_dir).await;
        let fetcher = AssetFetcher::new(client, cache, self.config.resolved_asset_base_url());
        let (resolved, failures) = self.resolve_all(&fetcher, &scan, options).await;

        for failure in &failures {
            warn!("Skipping {}: {}", failure.icon(), failure);
        }
        if !scan.is_empty() && resolved.is_empty() && !options.dry_run {
            return Err(HeroiconsError::NoIconsResolved {
                requested: scan.icons.len(),
            }
            .into());
        }

        // Render
        let package_name = derive_package_name(&output_dir, &self.config.fallback_package);
        let dir_name = output_dir.file_name().map(|n| n.to_string_lossy().into_owned());
        if dir_name.as_deref() != Some(package_name.as_str()) {
            warn!(
                "Output directory name {:?} is not a valid Go package name; using '{}'",
                dir_name.unwrap_or_default(),
                package_name
            );
        }

        let render_config = RenderConfig {
            package_name: package_name.clone(),
            default_class: self.config.default_class.clone(),
            source: self.config.asset_base_url.clone(),
            version: self.config.version.clone(),
            svg_attributes: self.config.svg_attributes.clone(),
        };
        let document = self.renderer.render(&resolved, &render_config)?;

        // Write
        let outcome = write_output(
            &output_path,
            &document,
            WriteOptions {
                force: options.force,
                dry_run: options.dry_run,
            },
        )?;

        match outcome {
            WriteOutcome::Previewed => {
                println!("\n--- Dry Run: Would generate {} ---", output_path.display());
                println!("{}", document.trim_end());
                println!("--- End Dry Run ---");
            }
            WriteOutcome::Unchanged => {
                say(format!("{} is up to date, no changes written", output_path.display()));
            }
            WriteOutcome::Created | WriteOutcome::Updated => {
                let verb = if outcome == WriteOutcome::Created { "Created" } else { "Updated" };
                say(format!(
                    "{} {} {} ({} icon(s))",
                    "✓".green(),
                    verb,
                    output_path.display(),
                    resolved.len()
                ));
            }
        }
        if !failures.is_empty() {
            say(format!(
                "{} {} icon(s) could not be processed (see warnings above)",
                "⚠".yellow(),
                failures.len()
            ));
        }

        Ok(GenerationReport {
            scan,
            catalog_available,
            unknown,
            resolved: resolved.into_iter().map(|icon| icon.request).collect(),
            failures,
            package_name,
            output_path,
            outcome,
            document,
        })
    }

    /// Fetch and parse every scanned icon, returning successes in document order.
    async fn resolve_all(
        &self,
        fetcher: &AssetFetcher,
        scan: &ScanReport,
        options: &GenerateOptions,
    ) -> (Vec<ResolvedIcon>, Vec<IconError>) {
        let pb = ProgressBar::new(scan.icons.len() as u64, options.show_progress && !options.quiet);
        let pb = &pb;

        let results: Vec<Result<ResolvedIcon, IconError>> = stream::iter(scan.icons.iter().cloned())
            .map(|icon| async move {
                pb.set_message(icon.to_string());
                let result = resolve_icon(fetcher, icon).await;
                pb.inc(1);
                result
            })
            .buffer_unordered(self.config.effective_max_parallel())
            .collect()
            .await;
        pb.finish_and_clear();

        let (mut resolved, mut failures) = (Vec::new(), Vec::new());
        for result in results {
            match result {
                Ok(icon) => resolved.push(icon),
                Err(e) => failures.push(e),
            }
        }
        resolved.sort_by(|a, b| a.request.cmp(&b.request));
        failures.sort_by(|a, b| a.icon().cmp(b.icon()));
        (resolved, failures)
    }
}

async fn resolve_icon(
    fetcher: &AssetFetcher,
    icon: IconRequest,
) -> Result<ResolvedIcon, IconError> {
    let asset = fetcher.fetch(&icon).await?;
    debug!("Fetched {} ({:?}, {})", icon, asset.origin, asset.content_hash);

    let content = match extract_elements(&asset.bytes) {
        Ok(content) => content,
        Err(source) => {
            return Err(IconError::Parse {
                icon,
                url: asset.url,
                source,
            });
        }
    };
    if content.style_hint != icon.style() {
        debug!("{} looks like a {} asset; rendering as {}", icon, content.style_hint, icon.style());
    }
    Ok(ResolvedIcon::new(icon, content.elements, asset.url))
}

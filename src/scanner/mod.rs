//! Reference scanner.
//!
//! Walks a source tree and collects every icon referenced through the
//! namespace grammar:
//!
//! ```text
//! @heroicons.Outline_bars_3
//! @heroicons.solid_Check_Circle
//! ```
//!
//! The style token is matched case-insensitively and must be `outline` or
//! `solid`; anything else is reported as an unrecognised reference. A
//! reference needs at least one name segment, so `@heroicons.Outline` alone
//! never matches.
//!
//! Reading a single file can fail without aborting the scan: the failure is
//! recorded in [`ScanReport::failed_files`] and the walk continues.

use crate::constants::{DEFAULT_EXTENSIONS, DEFAULT_NAMESPACE, GENERATED_TEMPL_GO_SUFFIX};
use crate::core::HeroiconsError;
use crate::icon::{IconRequest, IconStyle};
use crate::utils::fs::{absolute_path, is_within};
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// Settings for a single scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Namespace token before the style (`heroicons` in `@heroicons.Outline_x`).
    pub namespace: String,
    /// File extensions to read, without the leading dot.
    pub extensions: Vec<String>,
    /// Directory whose subtree is skipped, normally the generator's own output.
    pub exclude_dir: Option<PathBuf>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            exclude_dir: None,
        }
    }
}

/// A source file that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    /// File or directory that failed
    pub path: PathBuf,
    /// Underlying I/O error, rendered
    pub reason: String,
}

/// Everything a scan found.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Distinct icons, in rendering order.
    pub icons: BTreeSet<IconRequest>,
    /// Number of files read successfully.
    pub files_scanned: usize,
    /// Files or directories skipped because of I/O errors.
    pub failed_files: Vec<ScanFailure>,
    /// Number of grammar matches across all files, duplicates included.
    pub total_references: usize,
    /// Number of distinct matched reference strings.
    pub unique_references: usize,
    /// Matched references whose style token is neither outline nor solid.
    pub unrecognized: BTreeSet<String>,
}

impl ScanReport {
    /// Whether any icon was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Compiled reference grammar for one namespace.
#[derive(Debug, Clone)]
pub struct ReferenceMatcher {
    regex: Regex,
}

impl ReferenceMatcher {
    /// Compile the grammar for `namespace`.
    pub fn new(namespace: &str) -> Result<Self> {
        let pattern = format!(
            r"@{}\.([A-Za-z]+)((?:_[A-Za-z0-9]+)+)\b",
            regex::escape(namespace)
        );
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Invalid reference namespace: {namespace}"))?;
        Ok(Self { regex })
    }

    /// Feed every match in `content` into `report`, tracking raw matches in `seen`.
    fn collect(&self, content: &str, report: &mut ScanReport, seen: &mut BTreeSet<String>) {
        for captures in self.regex.captures_iter(content) {
            let (Some(whole), Some(style), Some(rest)) =
                (captures.get(0), captures.get(1), captures.get(2))
            else {
                continue;
            };

            report.total_references += 1;
            seen.insert(whole.as_str().to_string());

            let Ok(style) = style.as_str().parse::<IconStyle>() else {
                debug!("Ignoring reference with unknown style: {}", whole.as_str());
                report.unrecognized.insert(whole.as_str().to_string());
                continue;
            };

            let segments: Vec<&str> = rest.as_str().trim_start_matches('_').split('_').collect();
            if let Some(icon) = IconRequest::from_segments(style, &segments) {
                trace!("Found reference {} -> {}", whole.as_str(), icon);
                report.icons.insert(icon);
            }
        }
    }

    /// Extract the icons referenced in a single string.
    ///
    /// ```
    /// use templ_heroicons::scanner::ReferenceMatcher;
    ///
    /// let matcher = ReferenceMatcher::new("heroicons").unwrap();
    /// let icons = matcher.find_icons("@heroicons.OUTLINE_Bars_3 and @heroicons.outline_bars_3");
    /// assert_eq!(icons.len(), 1);
    /// ```
    #[must_use]
    pub fn find_icons(&self, content: &str) -> BTreeSet<IconRequest> {
        let mut report = ScanReport::default();
        let mut seen = BTreeSet::new();
        self.collect(content, &mut report, &mut seen);
        report.icons
    }
}

/// Scan `root` for icon references.
///
/// Fails only when `root` is not a directory. Unreadable files and
/// directories are recorded in the report.
pub fn scan_directory(root: &Path, options: &ScanOptions) -> Result<ScanReport> {
    if !root.is_dir() {
        return Err(HeroiconsError::InputDirNotFound {
            path: root.display().to_string(),
        }
        .into());
    }

    let matcher = ReferenceMatcher::new(&options.namespace)?;
    let root_abs = absolute_path(root)?;
    let excluded = match &options.exclude_dir {
        Some(dir) => exclusion_for(&root_abs, &absolute_path(dir)?),
        None => None,
    };

    debug!("Scanning {} for icon references", root_abs.display());

    let mut report = ScanReport::default();
    let mut seen = BTreeSet::new();

    let walker = WalkDir::new(&root_abs)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| match &excluded {
            Some(dir) if entry.depth() > 0 && is_within(entry.path(), dir) => {
                trace!("Skipping excluded path {}", entry.path().display());
                false
            }
            _ => true,
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root_abs.clone());
                warn!("Cannot read {}: {}", path.display(), e);
                report.failed_files.push(ScanFailure {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_source_file(entry.path(), &options.extensions) {
            continue;
        }

        match std::fs::read(entry.path()) {
            Ok(bytes) => {
                report.files_scanned += 1;
                let content = String::from_utf8_lossy(&bytes);
                matcher.collect(&content, &mut report, &mut seen);
            }
            Err(e) => {
                warn!("Cannot read {}: {}", entry.path().display(), e);
                report.failed_files.push(ScanFailure {
                    path: entry.path().to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report.unique_references = seen.len();

    debug!(
        "Scanned {} file(s): {} reference(s), {} unique, {} icon(s)",
        report.files_scanned,
        report.total_references,
        report.unique_references,
        report.icons.len()
    );

    Ok(report)
}

/// The output directory is only pruned when it lies strictly inside the root.
fn exclusion_for(root: &Path, output: &Path) -> Option<PathBuf> {
    if output != root && is_within(output, root) {
        Some(output.to_path_buf())
    } else {
        debug!(
            "Output directory {} is not inside {}, nothing to exclude",
            output.display(),
            root.display()
        );
        None
    }
}

/// Whether `path` has one of `extensions` and is not a `templ generate` artifact.
fn is_source_file(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.ends_with(GENERATED_TEMPL_GO_SUFFIX) {
        return false;
    }
    extensions.iter().any(|ext| {
        let ext = ext.trim_start_matches('.');
        name.len() > ext.len() + 1
            && name.ends_with(ext)
            && name.as_bytes()[name.len() - ext.len() - 1] == b'.'
    })
}

//! Global constants used throughout the generator.
//!
//! Defaults for the remote icon source, local paths and network behaviour live
//! here so that the CLI, the configuration layer and the tests agree on them.
//! Every value except the Go keyword list can be overridden through the
//! configuration file or command-line flags.

/// Default directory where the generated `heroicons.templ` file is placed.
pub const DEFAULT_OUTPUT_DIR: &str = "./components/heroicons";

/// File name of the generated templ document inside the output directory.
pub const OUTPUT_FILENAME: &str = "heroicons.templ";

/// Go package name used when the output directory name is not a valid identifier.
pub const DEFAULT_FALLBACK_PACKAGE: &str = "heroicons";

/// Default directory for cached SVG assets.
pub const DEFAULT_CACHE_DIR: &str = "./.heroicons_cache";

/// Default CSS class applied to the root `<svg>` element of every component.
pub const DEFAULT_SVG_CLASS: &str = "size-6";

/// Git branch or tag of the Heroicons repository the assets are taken from.
pub const HEROICONS_VERSION: &str = "master";

/// Asset URL template. `{version}` is replaced with the configured version tag.
pub const HEROICONS_BASE_URL: &str =
    "https://raw.githubusercontent.com/tailwindlabs/heroicons/{version}/optimized/24";

/// Directory-listing endpoint used to build the validation catalog.
pub const HEROICONS_LIST_URL: &str =
    "https://api.github.com/repos/tailwindlabs/heroicons/contents/optimized/24";

/// Namespace token that prefixes icon references in templ sources (`@heroicons.`).
pub const DEFAULT_NAMESPACE: &str = "heroicons";

/// Environment variable holding an optional bearer token for the catalog API.
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable pointing at a configuration file.
pub const CONFIG_ENV: &str = "TEMPL_HEROICONS_CONFIG";

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "templ-heroicons.toml";

/// Environment variable that disables progress bars when set.
pub const NO_PROGRESS_ENV: &str = "TEMPL_HEROICONS_NO_PROGRESS";

/// Source file extensions scanned for icon references by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["templ", "go"];

/// Suffix of files generated by `templ generate`; never scanned.
pub const GENERATED_TEMPL_GO_SUFFIX: &str = "_templ.go";

/// Default per-request HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default number of icons fetched concurrently.
pub const DEFAULT_MAX_PARALLEL: usize = 8;

/// Upper bound on the number of "did you mean" suggestions for unknown icons.
pub const MAX_SUGGESTIONS: usize = 3;

/// Stroke width applied to outline icons.
pub const OUTLINE_STROKE_WIDTH: &str = "1.5";

/// View box shared by every 24px Heroicon.
pub const SVG_VIEWBOX: &str = "0 0 24 24";

/// SVG namespace written on each generated root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Home page of the icon set, referenced in the generated banner.
pub const HEROICONS_HOMEPAGE: &str = "https://heroicons.com/";

/// Oldest templ release able to compile the generated spread attributes.
pub const MIN_TEMPL_VERSION: &str = "v0.2.513";

/// Reserved Go keywords; none of them may be used as a package name.
pub const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// User agent sent with every outgoing request.
pub fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

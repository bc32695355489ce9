//! templ-heroicons - Heroicons as Go templ components
//!
//! Scans a templ project for icon references such as `@heroicons.Outline_bars_3`
//! and generates a single `heroicons.templ` file containing one component per
//! referenced icon, with the SVG markup inlined.
//!
//! # Pipeline
//!
//! A run is a straight line through the modules below:
//!
//! 1. [`scanner`] walks the input tree and collects icon references
//! 2. [`catalog`] checks them against the published icon list (best effort)
//! 3. [`cache`] fetches each SVG, reusing previously downloaded copies
//! 4. [`svg`] reduces each SVG to its drawing primitives
//! 5. [`templating`] renders the templ document in a stable order
//! 6. [`output`] writes it, leaving the file alone when nothing changed
//!
//! [`generator`] drives the pipeline; [`cli`] wires it to the command line.
//!
//! # Supporting Modules
//!
//! - [`config`] - optional `templ-heroicons.toml` settings
//! - [`constants`] - defaults shared across modules
//! - [`core`] - error types and user-facing error formatting
//! - [`icon`] - icon styles and the parsed form of a reference
//! - [`utils`] - atomic file writes, path helpers and progress bars
//!
//! # Reference Syntax
//!
//! ```text
//! @heroicons.Outline_bars_3       -> outline/bars-3.svg  -> templ Outline_Bars_3
//! @heroicons.Solid_chevron_down   -> solid/chevron-down.svg -> templ Solid_Chevron_Down
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use templ_heroicons::config::GeneratorConfig;
//! use templ_heroicons::generator::{GenerateOptions, Generator};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut generator = Generator::new(GeneratorConfig::default());
//! let report = generator
//!     .run(&GenerateOptions::new("web", "web/components/heroicons"))
//!     .await?;
//! println!("{} icons in package {}", report.resolved.len(), report.package_name);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod generator;
pub mod icon;
pub mod output;
pub mod scanner;
pub mod svg;
pub mod templating;
pub mod utils;

// Test utilities (only available in tests)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

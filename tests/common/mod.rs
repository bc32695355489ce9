//! Common helpers for templ-heroicons integration tests
//!
//! A [`TestProject`] owns a temporary source tree, a cache directory and a
//! mock icon server. Runs go either through the library ([`TestProject::generate`])
//! or through the compiled binary ([`TestProject::run_cli`]).

// Not every test file uses every helper
#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use templ_heroicons::config::GeneratorConfig;
use templ_heroicons::generator::{GenerateOptions, GenerationReport, Generator};
use templ_heroicons::icon::IconStyle;
use templ_heroicons::test_utils::{SourceTree, init_test_logging, listing_json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Asset version served by the mock server.
pub const TEST_VERSION: &str = "v2.2.0";

/// Output directory, relative to the project root.
pub const OUTPUT_DIR: &str = "components/heroicons";

/// A project directory wired to a mock icon server.
pub struct TestProject {
    pub sources: SourceTree,
    pub server: MockServer,
    cache: TempDir,
}

impl TestProject {
    /// Start an empty project with a fresh mock server.
    pub async fn new() -> Result<Self> {
        init_test_logging(None);
        Ok(Self {
            sources: SourceTree::new()?,
            server: MockServer::start().await,
            cache: TempDir::new().context("Failed to create cache dir")?,
        })
    }

    pub fn root(&self) -> &Path {
        self.sources.path()
    }

    pub fn cache_dir(&self) -> &Path {
        self.cache.path()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join(OUTPUT_DIR)
    }

    pub fn output_file(&self) -> PathBuf {
        self.output_dir().join("heroicons.templ")
    }

    /// Write a templ source file into the project.
    pub fn add_source(&self, relative: &str, content: &str) -> Result<PathBuf> {
        self.sources.add_file(relative, content)
    }

    /// Serve `svg` for `{style}/{name}.svg`, expecting exactly `hits` requests
    /// when `hits` is given.
    pub async fn serve_icon(&self, style: IconStyle, name: &str, svg: &str, hits: Option<u64>) {
        let mock = Mock::given(method("GET"))
            .and(path(format!("/heroicons/{TEST_VERSION}/24/{}/{name}.svg", style.as_str())))
            .respond_with(ResponseTemplate::new(200).set_body_string(svg));
        let mock = match hits {
            Some(n) => mock.expect(n),
            None => mock,
        };
        mock.mount(&self.server).await;
    }

    /// Answer `{style}/{name}.svg` with `status`.
    pub async fn fail_icon(&self, style: IconStyle, name: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/heroicons/{TEST_VERSION}/24/{}/{name}.svg", style.as_str())))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Serve a catalog listing per style.
    pub async fn serve_catalog(&self, outline: &[&str], solid: &[&str]) {
        for (style, names) in [(IconStyle::Outline, outline), (IconStyle::Solid, solid)] {
            Mock::given(method("GET"))
                .and(path(format!("/contents/{}", style.as_str())))
                .respond_with(ResponseTemplate::new(200).set_body_json(listing_json(names)))
                .mount(&self.server)
                .await;
        }
    }

    /// Answer every catalog request with `response`.
    pub async fn catalog_responds(&self, response: ResponseTemplate) {
        for style in IconStyle::ALL {
            Mock::given(method("GET"))
                .and(path(format!("/contents/{}", style.as_str())))
                .respond_with(response.clone())
                .mount(&self.server)
                .await;
        }
    }

    /// Configuration pointing at the mock server and the private cache.
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            version: TEST_VERSION.to_string(),
            asset_base_url: format!("{}/heroicons/{{version}}/24", self.server.uri()),
            list_url: format!("{}/contents", self.server.uri()),
            cache_dir: self.cache.path().to_path_buf(),
            timeout_secs: 2,
            token_env: "TEMPL_HEROICONS_TEST_TOKEN".to_string(),
            ..GeneratorConfig::default()
        }
    }

    /// Write [`Self::config`] as TOML and return its path.
    pub fn write_config_file(&self) -> Result<PathBuf> {
        let content = toml::to_string(&self.config()).context("Failed to serialize config")?;
        let path = self.cache.path().join("templ-heroicons.toml");
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Options for a run over the whole project into [`OUTPUT_DIR`].
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            quiet: true,
            show_progress: false,
            ..GenerateOptions::new(self.root(), self.output_dir())
        }
    }

    /// Run the generator in-process.
    pub async fn generate(&self) -> Result<GenerationReport> {
        self.generate_with(self.config(), self.options()).await
    }

    pub async fn generate_with(
        &self,
        config: GeneratorConfig,
        options: GenerateOptions,
    ) -> Result<GenerationReport> {
        Generator::new(config).run(&options).await
    }

    /// Run the binary from the project root with the mock configuration.
    pub fn run_cli(&self, args: &[&str]) -> Result<assert_cmd::assert::Assert> {
        let config = self.write_config_file()?;
        let mut cmd = Command::cargo_bin("templ-heroicons")?;
        cmd.current_dir(self.root())
            .env("TEMPL_HEROICONS_CONFIG", &config)
            .env("TEMPL_HEROICONS_NO_PROGRESS", "1")
            .env_remove("RUST_LOG")
            .args(args);
        Ok(cmd.assert())
    }
}

//! TOML parsing for configuration files.

use crate::core::HeroiconsError;
use anyhow::Result;
use std::path::Path;

/// Read and deserialize a TOML file.
///
/// A missing or unreadable file is [`HeroiconsError::ConfigNotFound`]; invalid
/// TOML or an unexpected shape is [`HeroiconsError::ConfigParseError`].
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path).map_err(|_| HeroiconsError::ConfigNotFound {
        path: path.display().to_string(),
    })?;

    let config: T = toml::from_str(&content).map_err(|e| HeroiconsError::ConfigParseError {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(config)
}

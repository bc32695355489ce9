//! Asset download with cache lookup.

use super::AssetCache;
use crate::constants::user_agent;
use crate::icon::IconRequest;
use reqwest::header::{HeaderValue, USER_AGENT};
use sha2::{Digest, Sha256};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Where an asset's bytes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetOrigin {
    /// Read from the local cache without network access.
    Cache,
    /// Downloaded during this run.
    Network,
}

/// Raw SVG bytes for one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedAsset {
    /// Remote URL of the asset
    pub url: String,
    /// `sha256:<hex>` of `bytes`
    pub content_hash: String,
    /// Content exactly as downloaded
    pub bytes: Vec<u8>,
    /// Cache hit or download
    pub origin: AssetOrigin,
}

impl CachedAsset {
    fn new(url: String, bytes: Vec<u8>, origin: AssetOrigin) -> Self {
        let content_hash = format!("sha256:{}", hex::encode(Sha256::digest(&bytes)));
        Self {
            url,
            content_hash,
            bytes,
            origin,
        }
    }
}

/// A single icon could not be downloaded. The run continues without it.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("failed to download {icon}: HTTP {status} from {url}")]
    Status {
        /// Icon being fetched
        icon: IconRequest,
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Connection failure, timeout or truncated body.
    #[error("failed to download {icon} from {url}: {source}")]
    Request {
        /// Icon being fetched
        icon: IconRequest,
        /// Requested URL
        url: String,
        /// Transport error
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The icon that failed.
    #[must_use]
    pub const fn icon(&self) -> &IconRequest {
        match self {
            Self::Status { icon, .. } | Self::Request { icon, .. } => icon,
        }
    }
}

/// Downloads assets from `{base_url}/{style}/{name}.svg` through an [`AssetCache`].
#[derive(Debug, Clone)]
pub struct AssetFetcher {
    client: reqwest::Client,
    cache: AssetCache,
    base_url: String,
}

impl AssetFetcher {
    /// Create a fetcher sharing `client`.
    pub fn new(client: reqwest::Client, cache: AssetCache, base_url: impl Into<String>) -> Self {
        Self {
            client,
            cache,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build an HTTP client with the tool's user agent and `timeout`.
    pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Ok(agent) = HeaderValue::from_str(&user_agent()) {
            headers.insert(USER_AGENT, agent);
        }
        reqwest::Client::builder().timeout(timeout).default_headers(headers).build()
    }

    /// Asset URL for `icon`.
    ///
    /// ```
    /// use templ_heroicons::cache::{AssetCache, AssetFetcher};
    /// use templ_heroicons::icon::IconRequest;
    ///
    /// let client = reqwest::Client::new();
    /// let fetcher = AssetFetcher::new(client, AssetCache::disabled(), "https://cdn/24/");
    /// let icon = IconRequest::parse_reference("Outline_bars_3").unwrap();
    /// assert_eq!(fetcher.url_for(&icon), "https://cdn/24/outline/bars-3.svg");
    /// ```
    #[must_use]
    pub fn url_for(&self, icon: &IconRequest) -> String {
        format!("{}/{}", self.base_url, icon.asset_path())
    }

    /// The cache in use.
    #[must_use]
    pub const fn cache(&self) -> &AssetCache {
        &self.cache
    }

    /// Return the asset for `icon`, from the cache when possible.
    pub async fn fetch(&self, icon: &IconRequest) -> Result<CachedAsset, FetchError> {
        let url = self.url_for(icon);

        if let Some(bytes) = self.cache.get(&url).await {
            return Ok(CachedAsset::new(url, bytes, AssetOrigin::Cache));
        }

        debug!("Downloading {}", url);
        let response = self.client.get(&url).send().await.map_err(|source| FetchError::Request {
            icon: icon.clone(),
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                icon: icon.clone(),
                url,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|source| FetchError::Request {
            icon: icon.clone(),
            url: url.clone(),
            source,
        })?;

        self.cache.put(&url, &bytes).await;
        Ok(CachedAsset::new(url, bytes.to_vec(), AssetOrigin::Network))
    }
}

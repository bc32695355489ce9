//! Remote icon catalog used for optional validation.
//!
//! The catalog is the directory listing of the icon repository, one request
//! per style (`{list_url}/outline`, `{list_url}/solid`). It is a membership
//! oracle only: an unreachable or malformed listing yields
//! [`CatalogStatus::Unavailable`] and validation is skipped for the run,
//! while an icon missing from an available listing is still downloaded.

use crate::constants::{MAX_SUGGESTIONS, user_agent};
use crate::icon::{IconRequest, IconStyle};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::time::Duration;
use tracing::debug;

const GITHUB_JSON: &str = "application/vnd.github.v3+json";

/// Known icon names per style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    icons: HashMap<IconStyle, BTreeSet<String>>,
}

/// Outcome of a catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Both listings were retrieved.
    Available(Catalog),
    /// Validation is skipped for this run.
    Unavailable {
        /// Why the listing could not be used
        reason: String,
    },
}

/// Validation result for a single icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The icon exists in the catalog.
    Known,
    /// The icon is absent; `suggestions` holds the closest names of the same style.
    Unknown {
        /// Up to three nearby names, closest first
        suggestions: Vec<String>,
    },
    /// No catalog was available.
    Skipped,
}

#[derive(Debug, Deserialize)]
struct ListingEntry {
    name: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

impl Catalog {
    /// Build a catalog from explicit names, mainly for tests.
    pub fn from_names<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (IconStyle, S)>,
        S: Into<String>,
    {
        let mut icons: HashMap<IconStyle, BTreeSet<String>> = HashMap::new();
        for (style, name) in entries {
            icons.entry(style).or_default().insert(name.into());
        }
        Self { icons }
    }

    /// Whether `icon` is listed.
    #[must_use]
    pub fn contains(&self, icon: &IconRequest) -> bool {
        self.icons.get(&icon.style()).is_some_and(|names| names.contains(icon.name()))
    }

    /// Number of names known for `style`.
    #[must_use]
    pub fn len(&self, style: IconStyle) -> usize {
        self.icons.get(&style).map_or(0, BTreeSet::len)
    }

    /// Whether no names are known at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.values().all(BTreeSet::is_empty)
    }

    /// Closest names to `icon` within its style, by edit distance.
    #[must_use]
    pub fn suggestions(&self, icon: &IconRequest) -> Vec<String> {
        let Some(names) = self.icons.get(&icon.style()) else {
            return Vec::new();
        };
        let limit = (icon.name().len() / 2).max(3);
        let mut scored: Vec<(usize, &String)> = names
            .iter()
            .map(|name| (strsim::levenshtein(icon.name(), name), name))
            .filter(|(distance, _)| *distance <= limit)
            .collect();
        scored.sort();
        scored.into_iter().take(MAX_SUGGESTIONS).map(|(_, name)| name.clone()).collect()
    }
}

impl CatalogStatus {
    /// Check one icon against the catalog.
    #[must_use]
    pub fn validate(&self, icon: &IconRequest) -> Validation {
        match self {
            Self::Unavailable { .. } => Validation::Skipped,
            Self::Available(catalog) if catalog.contains(icon) => Validation::Known,
            Self::Available(catalog) => Validation::Unknown {
                suggestions: catalog.suggestions(icon),
            },
        }
    }

    /// Whether a catalog was retrieved.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// HTTP client for the listing endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    list_url: String,
    token: Option<String>,
}

impl CatalogClient {
    /// Create a client for `list_url`, authenticating with `token` when present.
    pub fn new(
        client: reqwest::Client,
        list_url: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            client,
            list_url: list_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Build a standalone client with its own timeout.
    pub fn with_timeout(
        list_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::new(client, list_url, token))
    }

    /// Fetch the listing for every style. Never fails; problems become `Unavailable`.
    pub async fn fetch(&self) -> CatalogStatus {
        let mut icons = HashMap::new();
        for style in IconStyle::ALL {
            match self.fetch_style(style).await {
                Ok(names) => {
                    debug!("Catalog lists {} {} icon(s)", names.len(), style);
                    icons.insert(style, names);
                }
                Err(reason) => {
                    debug!("Catalog unavailable: {}", reason);
                    return CatalogStatus::Unavailable { reason };
                }
            }
        }
        CatalogStatus::Available(Catalog { icons })
    }

    async fn fetch_style(&self, style: IconStyle) -> Result<BTreeSet<String>, String> {
        let url = format!("{}/{}", self.list_url, style.as_str());
        debug!("Fetching icon list from {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| describe_request_error(&url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("{url} returned HTTP {status}"));
        }

        let entries: Vec<ListingEntry> = response
            .json()
            .await
            .map_err(|e| format!("unexpected response from {url}: {e}"))?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.kind.as_deref().is_none_or(|kind| kind == "file"))
            .filter_map(|entry| entry.name.strip_suffix(".svg").map(str::to_string))
            .collect())
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        if let Ok(agent) = HeaderValue::from_str(&user_agent()) {
            headers.insert(USER_AGENT, agent);
        }
        if let Some(token) = &self.token
            && let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}"))
        {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }
}

fn describe_request_error(url: &str, error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("timed out fetching {url}")
    } else {
        format!("failed to fetch {url}: {error}")
    }
}

//! Pixabay search client
//!
//! Builds the search URL from an API key and a [`SearchOptions`] value,
//! performs a single GET, and decodes the JSON body into a [`ResultSet`].
//! There is no retry, caching, or pagination logic here; one call is one
//! round trip.

use std::path::PathBuf;

use reqwest::Client;

use crate::error::{Error, Result};
use crate::options::SearchOptions;
use crate::results::ResultSet;
use crate::types::SearchResponse;

/// The public Pixabay API endpoint
pub const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";

/// Client for the Pixabay image search API
///
/// Holds the API key and a shared HTTP client. Obtain a key at
/// <https://pixabay.com/api/docs/> (free).
#[derive(Debug, Clone)]
pub struct PixabayClient {
    client: Client,
    key: String,
    base_url: String,
    raw_dump: Option<PathBuf>,
}

impl PixabayClient {
    /// Create a client against the public Pixabay endpoint
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_base_url(key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (useful for testing)
    pub fn with_base_url(key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("pixabay-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            key: key.into(),
            base_url: base_url.into(),
            raw_dump: None,
        }
    }

    /// Additionally write the raw JSON body of every search to `path`
    ///
    /// Off by default; intended for debugging what the API actually
    /// returned. The file is overwritten on each search.
    pub fn dump_raw_response(mut self, path: impl Into<PathBuf>) -> Self {
        self.raw_dump = Some(path.into());
        self
    }

    /// Search Pixabay and return the decoded result set
    ///
    /// Spaces in `query` are replaced with `+` before transmission; no
    /// other escaping is applied. All filters come from `options`, with
    /// omitted fields taking their documented defaults.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<ResultSet> {
        let url = build_search_url(&self.base_url, &self.key, query, options);

        tracing::info!(
            "Searching pixabay: q={:?} page={} per_page={}",
            query,
            options.page,
            options.per_page
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                snippet: body.chars().take(200).collect(),
            });
        }

        if let Some(path) = &self.raw_dump {
            tokio::fs::write(path, &body).await?;
            tracing::debug!("Raw response written to {}", path.display());
        }

        let decoded: SearchResponse = serde_json::from_str(&body)?;
        Ok(ResultSet::new(decoded, self.client.clone()))
    }
}

/// Assemble the full search URL
///
/// The query goes through the documented space-to-`+` substitution; option
/// values are closed enum tokens and numbers, so they need no escaping.
fn build_search_url(base_url: &str, key: &str, query: &str, options: &SearchOptions) -> String {
    let query = query.trim().replace(' ', "+");
    let mut url = format!("{}?key={}&q={}", base_url, key, query);
    for (name, value) in options.to_query_params() {
        url.push('&');
        url.push_str(name);
        url.push('=');
        url.push_str(&value);
    }
    url
}

//! HTTP document source.

use async_trait::async_trait;
use folio_core::{Error, Result};

use super::DocumentSource;

/// Fetches documents from a static site over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source rooted at `base_url`, e.g. `https://blog.example.com`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a source that reuses an existing client.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// The base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a content-relative path to a full URL.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::fetch(&url, format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::fetch(&url, format!("HTTP {}", response.status())));
        }

        response
            .text()
            .await
            .map_err(|e| Error::fetch(&url, format!("body read failed: {e}")))
    }

    fn name(&self) -> &str {
        "http"
    }
}

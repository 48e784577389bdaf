//! In-memory document source for testing.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use folio_core::{Error, Result};

use super::DocumentSource;

/// Document source backed by a map of canned documents.
///
/// Useful for testing without a network or a content directory. Every
/// request is recorded so tests can assert on fetch counts.
///
/// # Examples
///
/// ```
/// use folio_articles::MemorySource;
///
/// let source = MemorySource::new()
///     .with_document("articles/1.md", "---\ntitle: One\n---\nBody")
///     .with_failure("articles/2.md");
/// ```
#[derive(Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MemorySource {
    /// Creates an empty source. Every fetch fails until documents are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document at `path`.
    pub fn with_document(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(path.into(), text.into());
        self
    }

    /// Makes every fetch of `path` fail with a transient error.
    pub fn with_failure(mut self, path: impl Into<String>) -> Self {
        self.failing.insert(path.into());
        self
    }

    /// Delays every fetch by `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// All paths requested so far, in request order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }

    /// Number of times `path` was requested.
    pub async fn request_count(&self, path: &str) -> usize {
        self.requests
            .lock()
            .await
            .iter()
            .filter(|p| p.as_str() == path)
            .count()
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let path = path.trim_start_matches('/');
        self.requests.lock().await.push(path.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.contains(path) {
            return Err(Error::fetch(path, "simulated transport failure"));
        }

        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| Error::fetch(path, "HTTP 404 Not Found"))
    }

    fn name(&self) -> &str {
        "memory"
    }
}

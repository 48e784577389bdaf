//! Document transports.
//!
//! A [`DocumentSource`] fetches raw text for a path relative to the content
//! root, e.g. `articles/files.json` or `articles/1.md`. The repository never
//! knows whether the bytes came over HTTP, from disk, or from memory.

mod fs;
mod http;
mod memory;

pub use fs::FsSource;
pub use http::HttpSource;
pub use memory::MemorySource;

use async_trait::async_trait;
use folio_core::Result;

/// Fetches raw documents by content-relative path.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the full text at `path`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Fetch` when the document does not exist or the
    /// transport fails, and `Error::InvalidData` when `path` is not a valid
    /// content-relative path.
    async fn fetch_text(&self, path: &str) -> Result<String>;

    /// Short name used in log lines, e.g. `"http"`.
    fn name(&self) -> &str;
}

//! Filesystem document source.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use folio_core::{Error, Result};

use super::DocumentSource;

/// Reads documents from a local content directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The content root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a content-relative path, rejecting anything that could escape
    /// the root.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(Error::invalid_data(format!(
                "path escapes content root: {path}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl DocumentSource for FsSource {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let full = self.resolve(path)?;
        log::debug!("Reading {}", full.display());
        tokio::fs::read_to_string(&full)
            .await
            .map_err(|e| Error::fetch(full.display().to_string(), e.to_string()))
    }

    fn name(&self) -> &str {
        "fs"
    }
}

//! Error types for folio-articles

use thiserror::Error;

/// Why a single article could not be loaded.
///
/// Every variant is recoverable: the repository surfaces it as `None` from
/// `load_one` and drops the article from `load_all`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadError {
    /// The id is not present in the catalog.
    #[error("Article not in catalog: {id}")]
    UnknownId {
        /// Requested article id
        id: String,
    },

    /// The raw document could not be fetched.
    #[error("Failed to fetch article {id}: {source}")]
    Fetch {
        /// Article id
        id: String,
        /// Transport error
        #[source]
        source: folio_core::Error,
    },

    /// The document does not start with a frontmatter block.
    #[error("Article {id} has no frontmatter block")]
    MissingFrontmatter {
        /// Article id
        id: String,
    },
}

impl LoadError {
    /// The id of the article that failed to load.
    pub fn id(&self) -> &str {
        match self {
            LoadError::UnknownId { id } => id,
            LoadError::Fetch { id, .. } => id,
            LoadError::MissingFrontmatter { id } => id,
        }
    }

    /// Returns whether the failure was a transient transport problem.
    pub fn is_transient(&self) -> bool {
        match self {
            LoadError::Fetch { source, .. } => source.is_transient(),
            LoadError::UnknownId { .. } => false,
            LoadError::MissingFrontmatter { .. } => false,
        }
    }
}

//! Search backend trait and result types.
//!
//! This module defines the `SearchBackend` trait that search implementations
//! satisfy, plus types for search parameters and results.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_search::{ArticleSearch, SearchBackend, SearchParams};
//!
//! let backend: &dyn SearchBackend = &ArticleSearch::new(repo);
//! let results = backend.search(SearchParams::new("rust")).await?;
//! println!("Found {} results", results.total);
//! ```

use async_trait::async_trait;
use folio_core::Result;
use serde::{Deserialize, Serialize};

use crate::types::MatchField;

/// Parameters for a search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Search query string.
    pub query: String,

    /// Maximum results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Snippet length in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet_length: Option<usize>,
}

impl SearchParams {
    /// Parameters for `query` with backend defaults.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Cap the number of returned items.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A single search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Article id.
    pub id: String,

    /// Article title.
    pub title: String,

    /// Article description.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,

    /// Article category.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub category: String,

    /// Article tags.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,

    /// Creation timestamp.
    pub created_at: String,

    /// Plain-text context around the first content match.
    pub snippet: String,

    /// `snippet` as HTML with query matches wrapped in `<mark>`.
    pub highlighted_snippet: String,

    /// Fields the query matched.
    pub matched: Vec<MatchField>,
}

/// Collection of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Search result items, in catalog order.
    pub items: Vec<SearchResult>,

    /// Total number of matching articles (may be > items.len() if limited).
    pub total: usize,

    /// Backend that executed the search.
    pub backend: String,
}

impl SearchResults {
    /// Create empty results.
    pub fn empty(backend: &str) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            backend: backend.to_string(),
        }
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Abstract search backend trait.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Execute a search query.
    async fn search(&self, params: SearchParams) -> Result<SearchResults>;

    /// Get the backend name for diagnostics.
    fn name(&self) -> &str;

    /// Check if the backend is ready to handle queries.
    fn is_ready(&self) -> bool {
        true
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_default() {
        let params = SearchParams::default();
        assert!(params.query.is_empty());
        assert!(params.limit.is_none());
        assert!(params.snippet_length.is_none());
    }

    #[test]
    fn test_search_params_serialization() {
        let params = SearchParams::new("test query").with_limit(5);
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("test query"));
        assert!(json.contains("\"limit\":5"));

        // Optional fields should be skipped when None
        let json = serde_json::to_string(&SearchParams::new("test")).unwrap();
        assert!(!json.contains("limit"));
        assert!(!json.contains("snippet_length"));
    }

    #[test]
    fn test_search_result_serialization() {
        let result = SearchResult {
            id: "1".to_string(),
            title: "Hello".to_string(),
            description: String::new(),
            category: "rust".to_string(),
            tags: Vec::new(),
            created_at: "2024-01-01".to_string(),
            snippet: "…hello…".to_string(),
            highlighted_snippet: "…<mark>hello</mark>…".to_string(),
            matched: vec![MatchField::Title, MatchField::Content],
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"id\":\"1\""));
        assert!(json.contains("[\"title\",\"content\"]"));
        assert!(!json.contains("description"));
        assert!(!json.contains("tags"));
    }

    #[test]
    fn test_search_results_empty() {
        let results = SearchResults::empty("test-backend");
        assert!(results.is_empty());
        assert_eq!(results.total, 0);
        assert_eq!(results.backend, "test-backend");
    }
}

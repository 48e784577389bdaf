//! Article search for Folio.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      folio-search                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SearchBackend trait                                        │
//! │  └── ArticleSearch (exact id, then substring scan)          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  snippet / highlight_matches (result display)               │
//! └─────────────────────────────────────────────────────────────┘
//!              │
//!              ▼
//!      ArticleRepository (folio-articles)
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_articles::{ArticleRepository, MemorySource};
//! use folio_search::ArticleSearch;
//!
//! # tokio_test::block_on(async {
//! let source = MemorySource::new()
//!     .with_document(
//!         "articles/files.json",
//!         r#"{"articles":[{"id":"1","filename":"1.md","title":"Rust tips","description":""}]}"#,
//!     )
//!     .with_document("articles/1.md", "---\n---\nBody");
//!
//! let search = ArticleSearch::new(ArticleRepository::new(Arc::new(source)));
//! assert_eq!(search.search("RUST").await.len(), 1);
//! assert!(search.search("  ").await.is_empty());
//! # });
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod backend;
pub mod search;
pub mod snippet;
pub mod types;

pub use backend::{SearchBackend, SearchParams, SearchResult, SearchResults};
pub use search::{matched_fields, ArticleSearch, BACKEND_NAME};
pub use types::{MatchField, SearchConfig};

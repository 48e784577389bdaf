//! # folio-articles
//!
//! Article catalog, document transports, and the article repository.
//!
//! Data flows one way: the repository fetches the catalog manifest, resolves
//! an id to a document filename, fetches the raw document through a
//! [`DocumentSource`], splits off the frontmatter with `folio-content`, and
//! folds fields, catalog metadata and defaults into an immutable [`Article`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_articles::{ArticleRepository, MemorySource};
//!
//! # tokio_test::block_on(async {
//! let source = MemorySource::new()
//!     .with_document(
//!         "articles/files.json",
//!         r#"{"articles":[{"id":"1","filename":"1.md","title":"T","description":"D"}]}"#,
//!     )
//!     .with_document("articles/1.md", "---\ntitle: Hello\ntags: [a, b]\n---\nBody text");
//!
//! let repo = ArticleRepository::new(Arc::new(source));
//! let article = repo.load_one("1").await.unwrap();
//! assert_eq!(article.title(), "Hello");
//! assert_eq!(article.description(), "D");
//! assert_eq!(article.tags(), ["a", "b"]);
//! # });
//! ```

#![doc = include_str!("../README.md")]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod repository;
pub mod source;

pub use error::LoadError;
pub use model::{sort_newest_first, Article, ArticleMetadata, Author, Catalog};
pub use repository::{keep_loaded, ArticleRepository, CatalogLayout};
pub use source::{DocumentSource, FsSource, HttpSource, MemorySource};

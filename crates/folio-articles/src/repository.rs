//! The article repository.
//!
//! Loads the catalog manifest, resolves ids to documents, and builds
//! [`Article`] records by folding frontmatter fields over catalog metadata
//! and defaults:
//!
//! | Field         | Source, first non-empty wins                     |
//! |---------------|--------------------------------------------------|
//! | `title`       | frontmatter `title`, catalog title, `Article id` |
//! | `description` | frontmatter `description`, catalog description   |
//! | `created_at`  | frontmatter `date`, load time                    |
//! | `updated_at`  | frontmatter `updated`, `date`, load time         |
//! | `category`    | frontmatter `category`, `""`                     |
//! | `tags`        | frontmatter `tags`, `[]`                         |
//! | `authors`     | frontmatter `authors`, `[]`                      |

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use futures::future::join_all;

use folio_content::{extract_frontmatter_with, FieldSchema};

use crate::error::LoadError;
use crate::model::{Article, ArticleMetadata, Author, Catalog};
use crate::source::DocumentSource;

/// Where the manifest and documents live, relative to the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLayout {
    /// Manifest path, default `articles/files.json`.
    pub manifest_path: String,
    /// Directory holding article documents, default `articles`.
    pub articles_dir: String,
}

impl Default for CatalogLayout {
    fn default() -> Self {
        Self {
            manifest_path: "articles/files.json".to_string(),
            articles_dir: "articles".to_string(),
        }
    }
}

impl CatalogLayout {
    /// Path of a document given its catalog filename.
    pub fn document_path(&self, filename: &str) -> String {
        let dir = self.articles_dir.trim_matches('/');
        if dir.is_empty() {
            filename.to_string()
        } else {
            format!("{dir}/{filename}")
        }
    }
}

/// Clock used for the load-time timestamp defaults.
pub type Clock = fn() -> DateTime<Utc>;

/// Loads catalog entries and articles from a [`DocumentSource`].
#[derive(Clone)]
pub struct ArticleRepository {
    source: Arc<dyn DocumentSource>,
    layout: CatalogLayout,
    schema: FieldSchema,
    clock: Clock,
}

impl ArticleRepository {
    /// Create a repository with the default layout and article schema.
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self {
            source,
            layout: CatalogLayout::default(),
            schema: FieldSchema::article(),
            clock: Utc::now,
        }
    }

    /// Use a different manifest/articles layout.
    pub fn with_layout(mut self, layout: CatalogLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Use a different clock for load-time defaults.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn layout(&self) -> &CatalogLayout {
        &self.layout
    }

    pub fn source(&self) -> &Arc<dyn DocumentSource> {
        &self.source
    }

    // ------------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------------

    /// Load the catalog manifest.
    ///
    /// Never fails: a transport error or malformed payload is logged and the
    /// built-in fallback catalog is returned instead.
    pub async fn load_catalog(&self) -> Catalog {
        match self.try_load_catalog().await {
            Ok(catalog) => {
                log::debug!(
                    "Loaded catalog with {} entries from {}",
                    catalog.len(),
                    self.source.name()
                );
                catalog
            }
            Err(e) => {
                log::warn!("Catalog unavailable, using fallback catalog: {e}");
                Catalog::fallback()
            }
        }
    }

    /// Load the catalog manifest, surfacing errors.
    pub async fn try_load_catalog(&self) -> folio_core::Result<Catalog> {
        let payload = self.source.fetch_text(&self.layout.manifest_path).await?;
        Catalog::from_json(&payload)
    }

    // ------------------------------------------------------------------------
    // Articles
    // ------------------------------------------------------------------------

    /// Load one article by id, returning why it failed.
    pub async fn try_load_one(&self, id: &str) -> Result<Article, LoadError> {
        let catalog = self.load_catalog().await;
        let meta = catalog
            .find(id)
            .ok_or_else(|| LoadError::UnknownId { id: id.to_string() })?;
        self.load_entry(meta).await
    }

    /// Load one article by id.
    ///
    /// Returns `None` when the id is not in the catalog, the document cannot
    /// be fetched, or it has no frontmatter block.
    pub async fn load_one(&self, id: &str) -> Option<Article> {
        match self.try_load_one(id).await {
            Ok(article) => Some(article),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    /// Load every article in the catalog.
    ///
    /// Documents are fetched concurrently. Articles that fail to load are
    /// dropped; the rest keep catalog order.
    pub async fn load_all(&self) -> Vec<Article> {
        let catalog = self.load_catalog().await;
        keep_loaded(self.load_entries(&catalog.articles).await)
    }

    /// Load the given catalog entries concurrently, one result per entry.
    pub async fn load_entries(&self, entries: &[ArticleMetadata]) -> Vec<Result<Article, LoadError>> {
        join_all(entries.iter().map(|meta| self.load_entry(meta))).await
    }

    /// Fetch and build a single catalog entry.
    pub async fn load_entry(&self, meta: &ArticleMetadata) -> Result<Article, LoadError> {
        let path = self.layout.document_path(&meta.filename);
        let raw = self
            .source
            .fetch_text(&path)
            .await
            .map_err(|source| LoadError::Fetch {
                id: meta.id.clone(),
                source,
            })?;
        self.build_article(meta, &raw)
    }

    /// Build an article from a catalog entry and its raw document.
    pub fn build_article(&self, meta: &ArticleMetadata, raw: &str) -> Result<Article, LoadError> {
        let parsed = extract_frontmatter_with(raw, &self.schema).ok_or_else(|| {
            LoadError::MissingFrontmatter {
                id: meta.id.clone(),
            }
        })?;

        let now = (self.clock)().to_rfc3339_opts(SecondsFormat::Millis, true);
        let field = |key: &str| parsed.get_str(key).filter(|v| !v.is_empty());

        let title = field("title")
            .map(str::to_string)
            .or_else(|| non_empty(&meta.title))
            .unwrap_or_else(|| format!("Article {}", meta.id));
        let description = field("description")
            .map(str::to_string)
            .unwrap_or_else(|| meta.description.clone());
        let date = field("date");
        let created_at = date.unwrap_or(now.as_str()).to_string();
        let updated_at = field("updated").or(date).unwrap_or(now.as_str()).to_string();
        let category = field("category").unwrap_or_default().to_string();
        let tags = parsed.get_list("tags");
        let authors = parsed
            .get_list("authors")
            .into_iter()
            .map(Author::named)
            .collect();

        Ok(Article::new(
            meta.id.clone(),
            title,
            description,
            parsed.body().to_string(),
            created_at,
            updated_at,
            category,
            tags,
            authors,
        ))
    }
}

impl std::fmt::Debug for ArticleRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleRepository")
            .field("source", &self.source.name())
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

/// Keep the successfully loaded articles, logging each failure.
pub fn keep_loaded(results: Vec<Result<Article, LoadError>>) -> Vec<Article> {
    results
        .into_iter()
        .filter_map(|result| match result {
            Ok(article) => Some(article),
            Err(e) => {
                log::warn!("Skipping article: {e}");
                None
            }
        })
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

// ============================================================================
// Tests
// ============================================================================

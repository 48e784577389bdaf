//! Catalog-order article search.
//!
//! [`ArticleSearch::search`] is the plain query contract: blank queries
//! return nothing, an exact id short-circuits, and everything else is a
//! case-insensitive substring scan over title, description, content,
//! category and tags. The [`SearchBackend`] implementation layers limits,
//! snippets and highlighting on top for display.

use async_trait::async_trait;

use folio_articles::{keep_loaded, Article, ArticleRepository, Catalog};
use folio_content::extract_text_content;

use crate::backend::{SearchBackend, SearchParams, SearchResult, SearchResults};
use crate::snippet::{highlight_matches, snippet};
use crate::types::{MatchField, SearchConfig};

/// Backend name reported in [`SearchResults`].
pub const BACKEND_NAME: &str = "substring";

/// Substring search over an [`ArticleRepository`].
#[derive(Debug, Clone)]
pub struct ArticleSearch {
    repo: ArticleRepository,
    config: SearchConfig,
}

impl ArticleSearch {
    /// Create a search over `repo` with default limits.
    pub fn new(repo: ArticleRepository) -> Self {
        Self::with_config(repo, SearchConfig::default())
    }

    /// Create a search with explicit limits.
    pub fn with_config(repo: ArticleRepository, config: SearchConfig) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn repository(&self) -> &ArticleRepository {
        &self.repo
    }

    /// Find articles matching `query`, in catalog order.
    ///
    /// - blank query: empty result, nothing is fetched
    /// - query equal to a catalog id that loads: just that article
    /// - otherwise: every loadable article matching case-insensitively
    pub async fn search(&self, query: &str) -> Vec<Article> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let catalog = self.repo.load_catalog().await;
        if let Some(article) = self.exact_id(&catalog, query).await {
            return vec![article];
        }

        let needle = query.to_lowercase();
        let articles = keep_loaded(self.repo.load_entries(&catalog.articles).await);
        let found: Vec<Article> = articles
            .into_iter()
            .filter(|article| !matched_fields(article, &needle).is_empty())
            .collect();
        log::debug!("Search {query:?} matched {} article(s)", found.len());
        found
    }

    async fn exact_id(&self, catalog: &Catalog, query: &str) -> Option<Article> {
        let meta = catalog.find(query)?;
        match self.repo.load_entry(meta).await {
            Ok(article) => Some(article),
            Err(e) => {
                log::debug!("Exact id {query:?} did not load, falling back to substring match: {e}");
                None
            }
        }
    }

    fn to_result(&self, article: &Article, query: &str, snippet_length: usize) -> SearchResult {
        let matched = if article.id() == query {
            vec![MatchField::Id]
        } else {
            matched_fields(article, &query.to_lowercase())
        };

        let plain = extract_text_content(article.content());
        let snippet = snippet(&plain, query, snippet_length);
        let highlighted_snippet = highlight_matches(&snippet, query);

        SearchResult {
            id: article.id().to_string(),
            title: article.title().to_string(),
            description: article.description().to_string(),
            category: article.category().to_string(),
            tags: article.tags().to_vec(),
            created_at: article.created_at().to_string(),
            snippet,
            highlighted_snippet,
            matched,
        }
    }
}

#[async_trait]
impl SearchBackend for ArticleSearch {
    async fn search(&self, params: SearchParams) -> folio_core::Result<SearchResults> {
        let limit = params.limit.unwrap_or(self.config.limit);
        let snippet_length = params.snippet_length.unwrap_or(self.config.snippet_length);

        let articles = ArticleSearch::search(self, &params.query).await;
        let items = articles
            .iter()
            .take(limit)
            .map(|article| self.to_result(article, &params.query, snippet_length))
            .collect();

        Ok(SearchResults {
            items,
            total: articles.len(),
            backend: BACKEND_NAME.to_string(),
        })
    }

    fn name(&self) -> &str {
        BACKEND_NAME
    }
}

/// Fields of `article` containing `needle`, which must already be
/// lower-cased.
pub fn matched_fields(article: &Article, needle: &str) -> Vec<MatchField> {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    let mut fields = Vec::new();
    if contains(article.title()) {
        fields.push(MatchField::Title);
    }
    if contains(article.description()) {
        fields.push(MatchField::Description);
    }
    if contains(article.content()) {
        fields.push(MatchField::Content);
    }
    if contains(article.category()) {
        fields.push(MatchField::Category);
    }
    if article.tags().iter().any(|tag| contains(tag)) {
        fields.push(MatchField::Tags);
    }
    fields
}

// ============================================================================
// Tests
// ============================================================================

//! Article, author, and catalog types.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog
// ============================================================================

/// One catalog entry from the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    /// Unique article id.
    pub id: String,
    /// Document filename relative to the articles directory.
    pub filename: String,
    /// Display title, used when the document has no `title` field.
    pub title: String,
    /// Summary, used when the document has no `description` field.
    #[serde(default)]
    pub description: String,
}

impl ArticleMetadata {
    /// Create a catalog entry.
    pub fn new(
        id: impl Into<String>,
        filename: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The catalog manifest: `{"articles": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Entries in publication order as listed by the manifest.
    pub articles: Vec<ArticleMetadata>,
}

impl Catalog {
    /// Number of entries in the built-in fallback catalog.
    pub const FALLBACK_LEN: usize = 3;

    /// The catalog used when the manifest cannot be loaded: ids `1..=3`,
    /// filenames `<id>.md`, placeholder titles and empty descriptions.
    pub fn fallback() -> Self {
        let articles = (1..=Self::FALLBACK_LEN)
            .map(|n| ArticleMetadata::new(n.to_string(), format!("{n}.md"), format!("Article {n}"), ""))
            .collect();
        Self { articles }
    }

    /// Parse a manifest payload.
    pub fn from_json(payload: &str) -> folio_core::Result<Self> {
        serde_json::from_str(payload)
            .map_err(|e| folio_core::Error::serialization(format!("invalid catalog manifest: {e}")))
    }

    /// Find the entry for `id`.
    pub fn find(&self, id: &str) -> Option<&ArticleMetadata> {
        self.articles.iter().find(|meta| meta.id == id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

// ============================================================================
// Article
// ============================================================================

/// An article author.
///
/// Frontmatter only carries author names; the contact fields stay empty
/// unless a caller fills them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl Author {
    /// An author with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            website: None,
            github: None,
        }
    }
}

/// A fully loaded article. Immutable once built by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    id: String,
    title: String,
    description: String,
    content: String,
    created_at: String,
    updated_at: String,
    category: String,
    tags: Vec<String>,
    authors: Vec<Author>,
}

impl Article {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: String,
        title: String,
        description: String,
        content: String,
        created_at: String,
        updated_at: String,
        category: String,
        tags: Vec<String>,
        authors: Vec<Author>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            content,
            created_at,
            updated_at,
            category,
            tags,
            authors,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Markdown body with the frontmatter block removed.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Creation timestamp as written in the document, or the load time.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    /// Category, or an empty string.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Parsed creation time, if `created_at` is RFC 3339 or `YYYY-MM-DD`.
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Sort articles by creation time, newest first.
///
/// Articles whose `created_at` cannot be parsed go last. The sort is stable,
/// so ties keep catalog order.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by_key(|article| Reverse(article.created_time()));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, created_at: &str) -> Article {
        Article::new(
            id.into(),
            format!("Title {id}"),
            String::new(),
            String::new(),
            created_at.into(),
            created_at.into(),
            String::new(),
            Vec::new(),
            Vec::new(),
        )
    }

    // ------------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------------

    #[test]
    fn test_fallback_catalog_shape() {
        let catalog = Catalog::fallback();
        assert_eq!(catalog.len(), 3);
        let ids: Vec<_> = catalog.articles.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(catalog.articles[1].filename, "2.md");
        assert_eq!(catalog.articles[2].title, "Article 3");
        assert!(catalog.articles.iter().all(|m| m.description.is_empty()));
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog = Catalog::from_json(
            r#"{"articles":[{"id":"a","filename":"a.md","title":"A","description":"About A"},
                            {"id":"b","filename":"b.md","title":"B"}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("a").unwrap().description, "About A");
        assert_eq!(catalog.find("b").unwrap().description, "");
        assert!(catalog.find("c").is_none());
    }

    #[test]
    fn test_catalog_from_json_rejects_malformed() {
        assert!(Catalog::from_json("not json").is_err());
        assert!(Catalog::from_json(r#"{"items":[]}"#).is_err());
        assert!(Catalog::from_json(r#"{"articles":[{"id":"1"}]}"#).is_err());
    }

    // ------------------------------------------------------------------------
    // Timestamps and ordering
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-03-01T10:00:00.000Z").is_some());
        assert!(parse_timestamp("2024-03-01T10:00:00+08:00").is_some());
        assert_eq!(
            parse_timestamp("2024-03-01"),
            parse_timestamp("2024-03-01T00:00:00Z")
        );
        assert!(parse_timestamp("March 1st").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_sort_newest_first() {
        let mut articles = vec![
            article("old", "2023-01-01"),
            article("junk", "someday"),
            article("new", "2024-06-01T12:00:00Z"),
            article("mid", "2023-09-15"),
        ];
        sort_newest_first(&mut articles);
        let ids: Vec<_> = articles.iter().map(Article::id).collect();
        assert_eq!(ids, ["new", "mid", "old", "junk"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut articles = vec![
            article("first", "2024-01-01"),
            article("second", "2024-01-01"),
        ];
        sort_newest_first(&mut articles);
        assert_eq!(articles[0].id(), "first");
        assert_eq!(articles[1].id(), "second");
    }

    #[test]
    fn test_article_serializes_camel_case() {
        let json = serde_json::to_value(article("1", "2024-01-01")).unwrap();
        assert_eq!(json["createdAt"], "2024-01-01");
        assert_eq!(json["updatedAt"], "2024-01-01");
        assert_eq!(json["category"], "");
    }

    #[test]
    fn test_author_named() {
        let author = Author::named("Ada");
        assert_eq!(author.name, "Ada");
        assert!(author.email.is_none());
        let json = serde_json::to_string(&author).unwrap();
        assert_eq!(json, r#"{"name":"Ada"}"#);
    }
}

//! Catalog and article assembly through the repository.

use folio_articles::{sort_newest_first, Article, Catalog};

use crate::common::{Entry, TestCorpus};

fn ids(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(Article::id).collect()
}

#[tokio::test]
async fn test_load_all_skips_unloadable_documents() {
    let corpus = TestCorpus::standard();
    let articles = corpus.repo.load_all().await;
    assert_eq!(ids(&articles), ["1", "2", "3"]);
}

#[tokio::test]
async fn test_sort_newest_first_for_listing() {
    let corpus = TestCorpus::standard();
    let mut articles = corpus.repo.load_all().await;
    sort_newest_first(&mut articles);
    assert_eq!(ids(&articles), ["2", "1", "3"]);
}

#[tokio::test]
async fn test_fields_fall_back_to_catalog() {
    let corpus = TestCorpus::standard();

    let first = corpus.repo.load_one("1").await.unwrap();
    assert_eq!(first.title(), "Getting Started with Rust");
    assert_eq!(first.description(), "First steps");
    assert_eq!(first.category(), "Tutorial");
    assert_eq!(first.tags(), ["rust", "beginner"]);
    assert_eq!(first.authors()[0].name, "Ada");
    assert_eq!(first.updated_at(), "2024-01-10");

    let second = corpus.repo.load_one("2").await.unwrap();
    assert_eq!(second.description(), "Notes on tokio and futures");
    assert_eq!(second.updated_at(), "2024-04-01");

    let third = corpus.repo.load_one("3").await.unwrap();
    assert_eq!(third.title(), "CSS palettes");
    assert_eq!(third.description(), "Highlight themes");
    assert!(third.tags().is_empty());
}

#[tokio::test]
async fn test_missing_document_is_not_found() {
    let corpus = TestCorpus::from_entries(vec![
        Entry::new("a", "A", "", "---\n---\nA body"),
        Entry::missing("b", "B"),
    ]);
    assert!(corpus.repo.load_one("b").await.is_none());
    assert_eq!(ids(&corpus.repo.load_all().await), ["a"]);
}

#[tokio::test]
async fn test_unreachable_manifest_uses_fallback_catalog() {
    let corpus = TestCorpus::from_entries(Vec::new());
    let source = corpus
        .source
        .clone()
        .with_failure("articles/files.json")
        .with_document("articles/1.md", "---\ntitle: Recovered\n---\nStill here");
    let repo = folio_articles::ArticleRepository::new(std::sync::Arc::new(source));

    assert_eq!(repo.load_catalog().await, Catalog::fallback());
    let article = repo.load_one("1").await.unwrap();
    assert_eq!(article.title(), "Recovered");
    assert_eq!(ids(&repo.load_all().await), ["1"]);
}

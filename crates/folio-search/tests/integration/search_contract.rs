//! Search behavior over the standard corpus.

use folio_articles::Article;
use folio_search::{MatchField, SearchBackend, SearchParams};
use proptest::prelude::*;

use crate::common::{TestCorpus, CORPUS_IDS};

fn ids(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(Article::id).collect()
}

#[tokio::test]
async fn test_substring_search_keeps_catalog_order() {
    let search = TestCorpus::standard().search();
    assert_eq!(ids(&search.search("rust").await), ["1", "2"]);
    assert_eq!(ids(&search.search("TUTORIAL").await), ["1"]);
    assert_eq!(ids(&search.search("tokio").await), ["2"]);
    assert_eq!(ids(&search.search("palette").await), ["3"]);
}

#[tokio::test]
async fn test_exact_id_returns_single_article() {
    let search = TestCorpus::standard().search();
    for id in &CORPUS_IDS[..3] {
        let found = search.search(id).await;
        assert_eq!(ids(&found), [*id], "query {id:?}");
    }
}

#[tokio::test]
async fn test_unloadable_id_never_appears() {
    let search = TestCorpus::standard().search();
    assert!(search.search("4").await.iter().all(|a| a.id() != "4"));
}

#[tokio::test]
async fn test_backend_results_for_display() {
    let search = TestCorpus::standard().search();
    let backend: &dyn SearchBackend = &search;

    let results = backend
        .search(SearchParams::new("handles"))
        .await
        .unwrap();
    assert_eq!(results.total, 1);
    let item = &results.items[0];
    assert_eq!(item.id, "2");
    assert_eq!(item.title, "Async in Practice");
    assert_eq!(item.matched, vec![MatchField::Content]);
    assert!(item.highlighted_snippet.contains("<mark>handles</mark>"));

    let none = backend.search(SearchParams::new("   ")).await.unwrap();
    assert!(none.is_empty());
}

proptest! {
    #[test]
    fn prop_blank_queries_return_nothing(query in "[ \t\r\n]{0,12}") {
        let search = TestCorpus::standard().search();
        let found = tokio_test::block_on(search.search(&query));
        prop_assert!(found.is_empty());
    }

    #[test]
    fn prop_results_are_a_catalog_ordered_subset(query in "[a-z]{1,4}") {
        let search = TestCorpus::standard().search();
        let found = tokio_test::block_on(search.search(&query));
        let positions: Vec<usize> = found
            .iter()
            .map(|a| CORPUS_IDS.iter().position(|id| *id == a.id()).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(found.iter().all(|a| a.id() != "4"));
    }
}

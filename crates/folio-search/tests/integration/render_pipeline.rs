//! Loaded articles through the renderer and theme coordinator.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::{Theme, ThemeLoadError};
use folio_render::{
    ContentRenderer, HighlightThemeCoordinator, RenderContext, StylesheetLoader,
    SyntectHighlighter, ThemeUrls,
};

use crate::common::TestCorpus;

struct InstantLoader;

#[async_trait]
impl StylesheetLoader for InstantLoader {
    async fn load(&self, _theme: Theme, _url: &str) -> Result<(), ThemeLoadError> {
        Ok(())
    }
}

fn renderer() -> ContentRenderer {
    let coordinator = HighlightThemeCoordinator::new(ThemeUrls::default(), Arc::new(InstantLoader));
    ContentRenderer::new(RenderContext::new(coordinator, Arc::new(SyntectHighlighter::new())))
}

#[tokio::test]
async fn test_render_loaded_article() {
    let corpus = TestCorpus::standard();
    let article = corpus.repo.load_one("1").await.unwrap();
    let doc = renderer().render(article.content());

    assert_eq!(doc.headings[0].id, "install");
    assert!(doc.html.contains(r#"<code class="inline-code">rustup</code>"#));

    let block = &doc.code_blocks[0];
    assert_eq!(block.display_name, "Bash");
    assert_eq!(block.raw, "curl https://sh.rustup.rs | sh");
    assert!(doc.html.contains("data-raw-code=\"curl https://sh.rustup.rs | sh\""));
}

#[tokio::test]
async fn test_repeated_headings_get_distinct_anchors() {
    let corpus = TestCorpus::standard();
    let article = corpus.repo.load_one("2").await.unwrap();
    let doc = renderer().render(article.content());

    let ids: Vec<_> = doc.headings.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, ["tasks", "tasks-1"]);
    assert!(doc.resolve_anchor("#/p/2#tasks-1").is_some());
}

#[tokio::test]
async fn test_unknown_language_still_highlighted() {
    let corpus = TestCorpus::standard();
    let article = corpus.repo.load_one("3").await.unwrap();
    let doc = renderer().render(article.content());

    let block = &doc.code_blocks[0];
    assert_eq!(block.display_name, "UNKNOWNLANG");
    assert_eq!(block.raw, "palette := dark");
    assert!(doc.html.contains("palette := dark"));
}

#[tokio::test]
async fn test_theme_switch_before_render() {
    let corpus = TestCorpus::standard();
    let article = corpus.repo.load_one("1").await.unwrap();
    let renderer = renderer();

    let doc = renderer
        .rerender_for_theme(article.content(), Theme::Dark)
        .await;
    assert!(!doc.html.contains("theme-loading"));

    let coordinator = renderer.context().coordinator();
    assert_eq!(coordinator.current_theme().await, Some(Theme::Dark));
    assert!(coordinator.link_tags().await.contains(r#"data-theme-type="dark""#));
}

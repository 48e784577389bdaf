//! Command handlers.
//!
//! [`App`] wires the repository, renderer and search together and writes
//! each command's output to a caller-supplied writer.

use std::io::Write;
use std::sync::Arc;

use folio_articles::{sort_newest_first, Article, ArticleRepository};
use folio_core::{Error, Result, Theme};
use folio_render::{
    ContentRenderer, HighlightThemeCoordinator, RenderContext, SyntectHighlighter,
};
use folio_search::{ArticleSearch, SearchBackend, SearchParams};
use pulldown_cmark_escape::{escape_html, FmtWriter};

use crate::cli::Command;
use crate::config::FolioConfig;

/// The assembled pipeline behind every command.
pub struct App {
    config: FolioConfig,
    repo: ArticleRepository,
    renderer: ContentRenderer,
    search: ArticleSearch,
}

impl App {
    /// Build the production pipeline described by `config`.
    pub fn from_config(config: FolioConfig) -> Result<Self> {
        let repo =
            ArticleRepository::new(config.document_source()?).with_layout(config.layout());
        let coordinator = HighlightThemeCoordinator::with_http(config.theme_urls());
        Ok(Self::new(config, repo, coordinator))
    }

    /// Build from explicit parts.
    pub fn new(
        config: FolioConfig,
        repo: ArticleRepository,
        coordinator: HighlightThemeCoordinator,
    ) -> Self {
        let ctx = RenderContext::new(coordinator, Arc::new(SyntectHighlighter::new()));
        let search = ArticleSearch::with_config(repo.clone(), config.search.clone());
        Self {
            config,
            repo,
            renderer: ContentRenderer::new(ctx),
            search,
        }
    }

    /// The effective configuration.
    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// Run one command.
    pub async fn run(&self, command: Command, out: &mut dyn Write) -> Result<()> {
        match command {
            Command::List => self.list(out).await,
            Command::Show { id, theme, raw } => self.show(&id, theme, raw, out).await,
            Command::Search { query, limit } => self.search(&query, limit, out).await,
            Command::Config => self.show_config(out),
        }
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    /// Print every loadable article, newest first.
    pub async fn list(&self, out: &mut dyn Write) -> Result<()> {
        let mut articles = self.repo.load_all().await;
        sort_newest_first(&mut articles);
        tracing::debug!(count = articles.len(), "listing articles");

        for article in &articles {
            writeln!(
                out,
                "{:>6}  {:<10}  {}",
                article.id(),
                short_date(article.created_at()),
                article.title()
            )?;
        }
        Ok(())
    }

    /// Print one article as a standalone HTML page, or its Markdown body.
    pub async fn show(
        &self,
        id: &str,
        theme: Option<Theme>,
        raw: bool,
        out: &mut dyn Write,
    ) -> Result<()> {
        let article = self
            .repo
            .load_one(id)
            .await
            .ok_or_else(|| Error::not_found(format!("article {id}")))?;

        if raw {
            writeln!(out, "{}", article.content())?;
            return Ok(());
        }

        let theme = theme.unwrap_or(self.config.theme.default);
        let doc = self
            .renderer
            .rerender_for_theme(article.content(), theme)
            .await;
        let links = self.renderer.context().coordinator().link_tags().await;

        write!(out, "{}", page(&article, theme, &links, &doc.html))?;
        Ok(())
    }

    /// Print matching articles with a context snippet.
    pub async fn search(
        &self,
        query: &str,
        limit: Option<usize>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let mut params = SearchParams::new(query);
        if let Some(limit) = limit {
            params = params.with_limit(limit);
        }
        let results = SearchBackend::search(&self.search, params).await?;

        if results.is_empty() {
            writeln!(out, "no results")?;
            return Ok(());
        }

        for item in &results.items {
            writeln!(out, "{:>6}  {}", item.id, item.title)?;
            if !item.snippet.is_empty() {
                writeln!(out, "        {}", item.snippet)?;
            }
        }
        if results.total > results.items.len() {
            writeln!(
                out,
                "({} of {} matches shown)",
                results.items.len(),
                results.total
            )?;
        }
        Ok(())
    }

    /// Print the effective configuration.
    pub fn show_config(&self, out: &mut dyn Write) -> Result<()> {
        write!(out, "{}", self.config.to_toml_string()?)?;
        Ok(())
    }
}

/// The calendar date of a timestamp, or the timestamp itself when shorter.
fn short_date(ts: &str) -> &str {
    ts.get(..10).unwrap_or(ts)
}

fn page(article: &Article, theme: Theme, links: &str, body: &str) -> String {
    let mut title = String::new();
    // Writing into a String cannot fail.
    let _ = escape_html(FmtWriter(&mut title), article.title());

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"en\" data-theme=\"{theme}\">\n"));
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    if !links.is_empty() {
        html.push_str(links);
        html.push('\n');
    }
    html.push_str("</head>\n<body>\n<article class=\"article\">\n");
    html.push_str(&format!("<h1 class=\"article-title\">{title}</h1>\n"));
    html.push_str(body);
    html.push_str("</article>\n</body>\n</html>\n");
    html
}

// ============================================================================
// Tests
// ============================================================================

//! Article Markdown to HTML.
//!
//! The renderer walks pulldown-cmark's event stream and rewrites the node
//! kinds the blog styles specially, then hands the stream to
//! `pulldown_cmark::html::push_html`:
//!
//! - headings get a unique anchor id and the `article-heading` class
//! - paragraphs get the `article-paragraph` class
//! - inline code becomes `<code class="inline-code">`
//! - fenced code blocks become a header (language label, copy button) over
//!   the highlighted code, with the raw source kept in `data-raw-code`
//!
//! Highlighting never fails a render: an unknown language falls back to
//! auto-detection, and an engine error falls back to the escaped raw text.

use std::sync::Arc;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use pulldown_cmark_escape::{escape_html, FmtWriter};

use folio_core::{AnchorIds, Theme};

use crate::clipboard::COPY_LABEL;
use crate::coordinator::HighlightThemeCoordinator;
use crate::highlight::SyntaxHighlighter;
use crate::language::display_name;

// ============================================================================
// Output types
// ============================================================================

/// One table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level, 1 through 6.
    pub level: u8,
    /// Plain heading text.
    pub text: String,
    /// Anchor id on the rendered heading.
    pub id: String,
}

/// A rendered fenced or indented code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCodeBlock {
    /// Element id, `code-0`, `code-1`, ...
    pub id: String,
    /// Fence language code, if any.
    pub language: Option<String>,
    /// Header label.
    pub display_name: String,
    /// Unmodified source, without the final newline.
    pub raw: String,
}

/// The output of a render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedDocument {
    pub html: String,
    /// Headings in document order.
    pub headings: Vec<TocEntry>,
    /// Code blocks in document order.
    pub code_blocks: Vec<RenderedCodeBlock>,
}

impl RenderedDocument {
    /// Resolve a location hash to a heading.
    ///
    /// Accepts a bare anchor (`some-heading`), a fragment (`#some-heading`),
    /// or a hash route with a trailing anchor (`#/p/1#some-heading`).
    pub fn resolve_anchor(&self, hash: &str) -> Option<&TocEntry> {
        let fragment = hash.rsplit('#').next()?.trim();
        if fragment.is_empty() {
            return None;
        }
        self.headings.iter().find(|h| h.id == fragment)
    }

    /// The raw source of the code block with element id `id`.
    pub fn raw_code(&self, id: &str) -> Option<&str> {
        self.code_blocks
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.raw.as_str())
    }
}

// ============================================================================
// Context
// ============================================================================

/// Shared collaborators for rendering.
///
/// Holds the application's single [`HighlightThemeCoordinator`]; every
/// renderer built from clones of one context observes the same theme state.
#[derive(Clone)]
pub struct RenderContext {
    coordinator: HighlightThemeCoordinator,
    highlighter: Arc<dyn SyntaxHighlighter>,
}

impl RenderContext {
    pub fn new(coordinator: HighlightThemeCoordinator, highlighter: Arc<dyn SyntaxHighlighter>) -> Self {
        Self {
            coordinator,
            highlighter,
        }
    }

    pub fn coordinator(&self) -> &HighlightThemeCoordinator {
        &self.coordinator
    }

    pub fn highlighter(&self) -> &Arc<dyn SyntaxHighlighter> {
        &self.highlighter
    }
}

// ============================================================================
// ContentRenderer
// ============================================================================

struct PendingHeading<'a> {
    level: pulldown_cmark::HeadingLevel,
    text: String,
    inner: Vec<Event<'a>>,
}

struct PendingCode {
    language: Option<String>,
    source: String,
}

/// Renders article Markdown to HTML.
#[derive(Clone)]
pub struct ContentRenderer {
    ctx: RenderContext,
    options: Options,
}

impl ContentRenderer {
    /// Create a renderer with tables, strikethrough and task lists enabled.
    pub fn new(ctx: RenderContext) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { ctx, options }
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Render `markdown`.
    ///
    /// Code blocks carry the `theme-loading` class while a palette load is
    /// in flight.
    pub fn render(&self, markdown: &str) -> RenderedDocument {
        let theme_loading = self.ctx.coordinator.is_loading();
        let mut ids = AnchorIds::new();
        let mut doc = RenderedDocument::default();
        let mut events: Vec<Event<'_>> = Vec::new();
        let mut heading: Option<PendingHeading<'_>> = None;
        let mut code: Option<PendingCode> = None;

        for event in Parser::new_ext(markdown, self.options) {
            if let Some(block) = code.as_mut() {
                match event {
                    Event::Text(text) => block.source.push_str(&text),
                    Event::End(TagEnd::CodeBlock) => {
                        if let Some(block) = code.take() {
                            let html = self.code_block(block, &mut doc, theme_loading);
                            emit(&mut heading, &mut events, Event::Html(html.into()));
                        }
                    }
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    code = Some(PendingCode {
                        language: fence_language(&kind),
                        source: String::new(),
                    });
                }
                Event::Start(Tag::Heading { level, .. }) => {
                    heading = Some(PendingHeading {
                        level,
                        text: String::new(),
                        inner: Vec::new(),
                    });
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(h) = heading.take() {
                        let id = ids.issue(&h.text);
                        let mut open = format!("<{} id=\"", h.level);
                        push_escaped(&mut open, &id);
                        open.push_str("\" class=\"article-heading\">");
                        events.push(Event::Html(open.into()));
                        events.extend(h.inner);
                        events.push(Event::Html(format!("</{}>\n", h.level).into()));
                        doc.headings.push(TocEntry {
                            level: h.level as u8,
                            text: h.text,
                            id,
                        });
                    }
                }
                Event::Start(Tag::Paragraph) => {
                    emit(
                        &mut heading,
                        &mut events,
                        Event::Html(CowStr::Borrowed("<p class=\"article-paragraph\">")),
                    );
                }
                Event::End(TagEnd::Paragraph) => {
                    emit(&mut heading, &mut events, Event::Html(CowStr::Borrowed("</p>\n")));
                }
                Event::Code(text) => {
                    if let Some(h) = heading.as_mut() {
                        h.text.push_str(&text);
                    }
                    let mut html = String::from("<code class=\"inline-code\">");
                    push_escaped(&mut html, &text);
                    html.push_str("</code>");
                    emit(&mut heading, &mut events, Event::InlineHtml(html.into()));
                }
                Event::Text(text) => {
                    if let Some(h) = heading.as_mut() {
                        h.text.push_str(&text);
                    }
                    emit(&mut heading, &mut events, Event::Text(text));
                }
                // Raw HTML in article sources is shown as text.
                Event::Html(raw) | Event::InlineHtml(raw) => {
                    emit(&mut heading, &mut events, Event::Text(raw));
                }
                other => emit(&mut heading, &mut events, other),
            }
        }

        pulldown_cmark::html::push_html(&mut doc.html, events.into_iter());
        doc
    }

    /// Wait for `theme` to attach, then render.
    ///
    /// A failed palette load is logged and the document renders anyway;
    /// the previous palette stays in place.
    pub async fn rerender_for_theme(&self, markdown: &str, theme: Theme) -> RenderedDocument {
        if let Err(e) = self.ctx.coordinator.ensure_theme(theme).await {
            log::warn!("Rendering without the requested palette: {e}");
        }
        self.render(markdown)
    }

    fn code_block(&self, block: PendingCode, doc: &mut RenderedDocument, theme_loading: bool) -> String {
        let PendingCode { language, mut source } = block;
        if source.ends_with('\n') {
            source.pop();
        }

        let id = format!("code-{}", doc.code_blocks.len());
        let label = display_name(language.as_deref());
        let highlighted = self.highlight(&source, language.as_deref());

        let mut html = String::with_capacity(highlighted.len() + source.len() * 2 + 320);
        html.push_str("<div class=\"code-block");
        if theme_loading {
            html.push_str(" theme-loading");
        }
        html.push_str("\"><div class=\"code-header\"><span class=\"code-language\">");
        push_escaped(&mut html, &label);
        html.push_str(
            "</span><button class=\"copy-button\" type=\"button\" \
             aria-label=\"Copy code to clipboard\" title=\"Copy\" data-code-id=\"",
        );
        html.push_str(&id);
        html.push_str("\"><span class=\"copy-text\">");
        html.push_str(COPY_LABEL);
        html.push_str("</span></button></div><pre class=\"code-pre\"><code id=\"");
        html.push_str(&id);
        html.push_str("\" class=\"hljs language-");
        push_escaped(&mut html, language.as_deref().unwrap_or("text"));
        html.push_str("\" data-raw-code=\"");
        push_escaped(&mut html, &source);
        html.push_str("\">");
        html.push_str(&highlighted);
        html.push_str("</code></pre></div>\n");

        doc.code_blocks.push(RenderedCodeBlock {
            id,
            language,
            display_name: label,
            raw: source,
        });
        html
    }

    fn highlight(&self, code: &str, language: Option<&str>) -> String {
        let highlighter = &self.ctx.highlighter;
        let result = match language {
            Some(lang) if highlighter.has_language(lang) => highlighter.highlight(code, lang),
            _ => highlighter.highlight_auto(code),
        };
        result.unwrap_or_else(|e| {
            log::warn!("Highlighting failed, rendering plain code: {e}");
            let mut plain = String::with_capacity(code.len());
            push_escaped(&mut plain, code);
            plain
        })
    }
}

impl std::fmt::Debug for ContentRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentRenderer")
            .field("coordinator", &self.ctx.coordinator)
            .finish_non_exhaustive()
    }
}

fn emit<'a>(heading: &mut Option<PendingHeading<'a>>, events: &mut Vec<Event<'a>>, event: Event<'a>) {
    match heading {
        Some(h) => h.inner.push(event),
        None => events.push(event),
    }
}

fn fence_language(kind: &CodeBlockKind<'_>) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => info
            .split(|c: char| c.is_whitespace() || c == ',')
            .next()
            .filter(|lang| !lang.is_empty())
            .map(str::to_string),
        CodeBlockKind::Indented => None,
    }
}

/// Append `text` to `out`, HTML-escaped.
pub(crate) fn push_escaped(out: &mut String, text: &str) {
    // Writing into a String cannot fail.
    let _ = escape_html(FmtWriter(&mut *out), text);
}

// ============================================================================
// Tests
// ============================================================================

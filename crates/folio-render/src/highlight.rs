//! Syntax highlighting engine boundary.
//!
//! The renderer only needs three capabilities from an engine: "is this
//! language known", "highlight as language X", and "guess and highlight".
//! [`SyntectHighlighter`] provides them with syntect's bundled grammars,
//! emitting `hljs-`-prefixed CSS classes so the managed highlight palettes
//! apply to the markup.

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use folio_core::{Error, Result};

/// CSS class prefix applied to every highlighted token.
pub const CLASS_PREFIX: &str = "hljs-";

/// A syntax highlighting engine.
pub trait SyntaxHighlighter: Send + Sync {
    /// Whether `language` is recognized.
    fn has_language(&self, language: &str) -> bool;

    /// Highlight `code` as `language`, returning HTML markup.
    fn highlight(&self, code: &str, language: &str) -> Result<String>;

    /// Detect the language of `code` as best the engine can, and highlight.
    fn highlight_auto(&self, code: &str) -> Result<String>;
}

/// syntect-backed highlighter producing class-annotated HTML.
pub struct SyntectHighlighter {
    syntax_set: SyntaxSet,
}

impl SyntectHighlighter {
    /// Create a highlighter with syntect's bundled grammars.
    pub fn new() -> Self {
        Self::with_syntax_set(SyntaxSet::load_defaults_newlines())
    }

    /// Create a highlighter over a custom grammar set.
    pub fn with_syntax_set(syntax_set: SyntaxSet) -> Self {
        Self { syntax_set }
    }

    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        let language = language.trim();
        if language.is_empty() {
            return None;
        }
        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_token(&language.to_lowercase()))
    }

    fn generate(&self, code: &str, syntax: &SyntaxReference) -> Result<String> {
        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed {
                prefix: CLASS_PREFIX,
            },
        );

        // Grammars loaded with newlines expect every line to end in one.
        let appended = !code.ends_with('\n');
        let owned;
        let text = if appended {
            owned = format!("{code}\n");
            &owned
        } else {
            code
        };

        for line in LinesWithEndings::from(text) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| Error::highlight(format!("{}: {e}", syntax.name)))?;
        }
        let mut html = generator.finalize();
        if appended {
            strip_final_newline(&mut html);
        }
        Ok(html)
    }
}

/// Remove the last newline of generated markup when only closing `</span>`
/// tags follow it.
fn strip_final_newline(html: &mut String) {
    if let Some(pos) = html.rfind('\n') {
        if html[pos + 1..]
            .split_inclusive('>')
            .all(|tag| tag == "</span>")
        {
            html.remove(pos);
        }
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter for SyntectHighlighter {
    fn has_language(&self, language: &str) -> bool {
        self.find_syntax(language).is_some()
    }

    fn highlight(&self, code: &str, language: &str) -> Result<String> {
        let syntax = self
            .find_syntax(language)
            .ok_or_else(|| Error::highlight(format!("unknown language: {language}")))?;
        self.generate(code, syntax)
    }

    fn highlight_auto(&self, code: &str) -> Result<String> {
        let syntax = code
            .lines()
            .next()
            .and_then(|first| self.syntax_set.find_syntax_by_first_line(first))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        log::debug!("Auto-detected syntax: {}", syntax.name);
        self.generate(code, syntax)
    }
}

impl std::fmt::Debug for SyntectHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntectHighlighter")
            .field("syntaxes", &self.syntax_set.syntaxes().len())
            .finish()
    }
}

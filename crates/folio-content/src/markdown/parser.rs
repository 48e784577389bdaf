//! Markdown plain-text extraction.
//!
//! Search snippets are cut from the readable text of an article rather than
//! from its Markdown source, so the markup characters (`**`, `[](...)`, code
//! fences) never leak into a result preview.
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::parser::extract_text_content;
//!
//! let content = "# Title\n\nSome **bold** and *italic* text.\n\n```rust\ncode\n```";
//! let text = extract_text_content(content);
//! assert_eq!(text, "Title Some bold and italic text.");
//! ```

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Extract plain text content from markdown, stripping all formatting.
///
/// Removes heading markers, emphasis, link targets and fenced code blocks.
/// Inline code keeps its text. Whitespace is collapsed to single spaces.
pub fn extract_text_content(content: &str) -> String {
    let parser = Parser::new(content);
    let mut text_content = String::new();
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
            }
            Event::Text(text) | Event::Code(text) if !in_code_block => {
                if !text_content.is_empty() && !text_content.ends_with(' ') {
                    text_content.push(' ');
                }
                text_content.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak => {
                if !text_content.is_empty() && !text_content.ends_with(' ') {
                    text_content.push(' ');
                }
            }
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Heading(_)) => {
                if !text_content.is_empty() && !text_content.ends_with('\n') {
                    text_content.push('\n');
                }
            }
            _ => {}
        }
    }

    normalize_whitespace(&text_content)
}

/// Normalize whitespace: collapse runs, trim ends.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Tests
// ============================================================================

//! # folio-render
//!
//! Markdown rendering for Folio articles.
//!
//! # Modules
//!
//! - [`renderer`]: [`ContentRenderer`] and the rendered document model
//! - [`highlight`]: the [`SyntaxHighlighter`] boundary and its syntect backend
//! - [`coordinator`]: [`HighlightThemeCoordinator`], the owner of the managed
//!   highlight stylesheets
//! - [`clipboard`]: the code block [`CopyButton`]
//! - [`language`]: language display names
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_render::{
//!     ContentRenderer, HighlightThemeCoordinator, RenderContext, SyntectHighlighter, ThemeUrls,
//! };
//!
//! let coordinator = HighlightThemeCoordinator::with_http(ThemeUrls::default());
//! let ctx = RenderContext::new(coordinator, Arc::new(SyntectHighlighter::new()));
//! let renderer = ContentRenderer::new(ctx);
//!
//! let doc = renderer.render("# Hi\n\n```rust\nfn main() {}\n```");
//! assert_eq!(doc.headings[0].id, "hi");
//! assert_eq!(doc.code_blocks[0].display_name, "Rust");
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod clipboard;
pub mod coordinator;
pub mod highlight;
pub mod language;
pub mod renderer;

pub use clipboard::{Clipboard, ClipboardError, CopyButton, CopyMethod, InputHandle, SelectionHost};
pub use coordinator::{
    HighlightThemeCoordinator, HttpStylesheetLoader, ManagedStylesheet, StylesheetLoader,
    ThemeLoadState, ThemeUrls,
};
pub use highlight::{SyntaxHighlighter, SyntectHighlighter};
pub use language::display_name;
pub use renderer::{ContentRenderer, RenderContext, RenderedCodeBlock, RenderedDocument, TocEntry};

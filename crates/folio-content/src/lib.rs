//! Frontmatter extraction and Markdown text utilities.
//!
//! This crate provides the document-level parsing used by the article
//! repository and the search layer. It knows nothing about articles as such:
//! it returns generic field values and plain strings, and the article crate
//! folds them into its own model.
//!
//! # Modules
//!
//! - [`markdown`]: Markdown parsing and frontmatter extraction
//!   - [`markdown::frontmatter`]: line-oriented frontmatter extraction
//!   - [`markdown::parser`]: plain-text extraction
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::extract_frontmatter;
//!
//! let content = "---\ntitle: Hello\ntags: [rust, blog]\n---\n\nBody";
//! let result = extract_frontmatter(content).unwrap();
//! assert_eq!(result.get_str("title"), Some("Hello"));
//! assert_eq!(result.get_list("tags"), vec!["rust", "blog"]);
//! assert_eq!(result.body(), "Body");
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod markdown;

// Re-export commonly used types
pub use markdown::{
    extract_frontmatter, extract_frontmatter_with, extract_text_content, parse_fields, FieldKind,
    FieldSchema, FieldValue, FrontmatterFields, FrontmatterResult,
};

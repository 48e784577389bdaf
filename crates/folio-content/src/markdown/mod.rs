//! Markdown parsing and frontmatter extraction utilities.
//!
//! - [`frontmatter`]: `---`-delimited metadata block extraction
//! - [`parser`]: Markdown plain-text extraction
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::{extract_frontmatter, FieldValue};
//!
//! let content = "---\ntitle: 'Quoted'\n---\nBody text";
//! let result = extract_frontmatter(content).unwrap();
//!
//! assert_eq!(
//!     result.fields().get("title"),
//!     Some(&FieldValue::Scalar("Quoted".to_string()))
//! );
//! ```

pub mod frontmatter;
pub mod parser;

// Re-export key types and functions
pub use frontmatter::{
    extract_frontmatter, extract_frontmatter_with, parse_fields, FieldKind, FieldSchema,
    FieldValue, FrontmatterFields, FrontmatterResult,
};
pub use parser::extract_text_content;

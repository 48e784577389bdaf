//! Frontmatter extraction from article documents.
//!
//! Frontmatter is a metadata block at the very start of a document, delimited
//! by `---` lines:
//!
//! ```markdown
//! ---
//! title: "My Document"
//! date: 2024-03-01
//! tags: [rust, 'markdown']
//! # comments and blank lines are ignored
//! ---
//!
//! # Document Content
//! ```
//!
//! This is a line-oriented `key: value` format, not YAML. Each line is split
//! at its first `:`. A value is a list only when its key is declared as a list
//! in the [`FieldSchema`] *and* the value is written `[a, b, c]`; everything
//! else is a scalar with all quote characters removed.
//!
//! Known limitation: list elements are split on every comma, so a quoted
//! element containing a comma is split too. Elements that are empty after
//! trimming and unquoting are dropped, so `[a,,b]` and `[a, '']` lose the
//! empty entries and `[]` is an empty list.
//!
//! # Usage
//!
//! ```rust
//! use folio_content::markdown::extract_frontmatter;
//!
//! let content = "---\r\ntitle: Test\r\n---\r\n\r\nBody";
//! let result = extract_frontmatter(content).unwrap();
//!
//! assert_eq!(result.get_str("title"), Some("Test"));
//! assert_eq!(result.body(), "Body");
//!
//! // No leading delimiter: nothing is returned
//! assert!(extract_frontmatter("# Just Markdown").is_none());
//! ```

use std::fmt;

const DELIMITER: &str = "---";
const QUOTES: [char; 2] = ['\'', '"'];

// ============================================================================
// Field values and schema
// ============================================================================

/// A parsed frontmatter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single string, quote characters removed.
    Scalar(String),
    /// A bracketed `[a, b, c]` list.
    List(Vec<String>),
}

impl FieldValue {
    /// The scalar string, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    /// The list items, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Scalar(_) => None,
            FieldValue::List(items) => Some(items),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Scalar(s) => f.write_str(s),
            FieldValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// The kind of value a frontmatter key expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain string value.
    Scalar,
    /// Bracketed list value.
    List,
}

/// Declares which frontmatter keys hold lists.
///
/// Keys not listed are scalars, including unknown keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    list_keys: Vec<String>,
}

impl FieldSchema {
    /// Create a schema with the given list-valued keys.
    pub fn new<I, S>(list_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            list_keys: list_keys.into_iter().map(Into::into).collect(),
        }
    }

    /// The schema for article documents: `tags` and `authors` are lists.
    pub fn article() -> Self {
        Self::new(["tags", "authors"])
    }

    /// The value kind expected for `key`.
    pub fn kind_of(&self, key: &str) -> FieldKind {
        if self.list_keys.iter().any(|k| k == key) {
            FieldKind::List
        } else {
            FieldKind::Scalar
        }
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::article()
    }
}

// ============================================================================
// FrontmatterFields
// ============================================================================

/// Parsed frontmatter fields, in document order.
///
/// A repeated key keeps its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontmatterFields {
    entries: Vec<(String, FieldValue)>,
}

impl FrontmatterFields {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Iterate over fields in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// FrontmatterResult
// ============================================================================

/// A document split into its frontmatter fields and body.
#[derive(Debug, Clone)]
pub struct FrontmatterResult<'a> {
    fields: FrontmatterFields,
    body: &'a str,
}

impl<'a> FrontmatterResult<'a> {
    /// The parsed fields.
    pub fn fields(&self) -> &FrontmatterFields {
        &self.fields
    }

    /// Take ownership of the parsed fields.
    pub fn into_fields(self) -> FrontmatterFields {
        self.fields
    }

    /// The body after the closing delimiter, trimmed.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Get a scalar field.
    ///
    /// Returns `None` if the field is missing or is a list.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key)?.as_scalar()
    }

    /// Get a list field.
    ///
    /// A non-empty scalar is treated as a one-item list. Returns an empty vec
    /// if the field is missing.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        match self.fields.get(key) {
            Some(FieldValue::List(items)) => items.clone(),
            Some(FieldValue::Scalar(s)) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        }
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Extract frontmatter using the article schema.
///
/// See [`extract_frontmatter_with`].
pub fn extract_frontmatter(content: &str) -> Option<FrontmatterResult<'_>> {
    extract_frontmatter_with(content, &FieldSchema::article())
}

/// Extract frontmatter from a document.
///
/// The document must begin with a `---` line, followed by zero or more field
/// lines, followed by a closing `---` line. Both `\n` and `\r\n` line endings
/// are accepted.
///
/// # Returns
///
/// * `Some(result)` - The parsed fields and the trimmed body
/// * `None` - If the document does not start with a complete frontmatter
///   block; no partial body is ever returned
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::{extract_frontmatter_with, FieldSchema, FieldValue};
///
/// let schema = FieldSchema::new(["aliases"]);
/// let content = "---\naliases: [a, b]\ntags: [x]\n---\nBody";
/// let result = extract_frontmatter_with(content, &schema).unwrap();
///
/// assert_eq!(result.get_list("aliases"), vec!["a", "b"]);
/// // `tags` is not a list key in this schema
/// assert_eq!(result.get_str("tags"), Some("[x]"));
/// ```
pub fn extract_frontmatter_with<'a>(
    content: &'a str,
    schema: &FieldSchema,
) -> Option<FrontmatterResult<'a>> {
    let after_opening = content.strip_prefix(DELIMITER)?;
    let block_start = after_opening
        .strip_prefix("\r\n")
        .or_else(|| after_opening.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in block_start.split_inclusive('\n') {
        let bare = line.trim_end_matches('\n').trim_end_matches('\r');
        if bare == DELIMITER {
            let block = &block_start[..offset];
            let body = block_start[offset + line.len()..].trim();
            return Some(FrontmatterResult {
                fields: parse_fields(block, schema),
                body,
            });
        }
        offset += line.len();
    }

    log::debug!("Frontmatter opening delimiter found but no closing delimiter");
    None
}

/// Parse the lines of a frontmatter block into fields.
///
/// Blank lines, lines starting with `#`, and lines without a `:` (or with an
/// empty key) are skipped.
pub fn parse_fields(block: &str, schema: &FieldSchema) -> FrontmatterFields {
    let mut fields = FrontmatterFields::new();

    for line in block.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, raw_value)) = trimmed.split_once(':') else {
            log::debug!("Skipping frontmatter line without ':': {trimmed}");
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let value = parse_value(raw_value.trim(), schema.kind_of(key));
        fields.insert(key, value);
    }

    fields
}

fn parse_value(raw: &str, kind: FieldKind) -> FieldValue {
    if kind == FieldKind::List && raw.len() >= 2 && raw.starts_with('[') && raw.ends_with(']') {
        let items = raw[1..raw.len() - 1]
            .split(',')
            .map(|item| item.trim().trim_matches(QUOTES).to_string())
            .filter(|item| !item.is_empty())
            .collect();
        FieldValue::List(items)
    } else {
        FieldValue::Scalar(raw.replace(QUOTES, ""))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ------------------------------------------------------------------------
    // Delimiter detection
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_valid_frontmatter() {
        let content = "---\ntitle: Hello\ndescription: A post\n---\nBody text";
        let result = extract_frontmatter(content).unwrap();

        assert_eq!(result.get_str("title"), Some("Hello"));
        assert_eq!(result.get_str("description"), Some("A post"));
        assert_eq!(result.body(), "Body text");
    }

    #[test]
    fn test_extract_crlf_line_endings() {
        let content = "---\r\ntitle: Windows\r\ntags: [a, b]\r\n---\r\n\r\nBody\r\n";
        let result = extract_frontmatter(content).unwrap();

        assert_eq!(result.get_str("title"), Some("Windows"));
        assert_eq!(result.get_list("tags"), vec!["a", "b"]);
        assert_eq!(result.body(), "Body");
    }

    #[test]
    fn test_extract_no_frontmatter() {
        assert!(extract_frontmatter("# Just Markdown\n\nNo frontmatter.").is_none());
    }

    #[test]
    fn test_extract_leading_whitespace_is_not_frontmatter() {
        assert!(extract_frontmatter("\n---\ntitle: x\n---\nBody").is_none());
    }

    #[test]
    fn test_extract_no_closing_delimiter() {
        assert!(extract_frontmatter("---\ntitle: Incomplete\n\nNo closing").is_none());
    }

    #[test]
    fn test_extract_only_opening_delimiter() {
        assert!(extract_frontmatter("---").is_none());
        assert!(extract_frontmatter("---\n").is_none());
    }

    #[test]
    fn test_extract_empty_frontmatter() {
        let result = extract_frontmatter("---\n---\nBody content").unwrap();
        assert!(result.fields().is_empty());
        assert_eq!(result.body(), "Body content");
    }

    #[test]
    fn test_extract_empty_body() {
        let result = extract_frontmatter("---\ntitle: x\n---").unwrap();
        assert_eq!(result.get_str("title"), Some("x"));
        assert_eq!(result.body(), "");
    }

    #[test]
    fn test_dashes_in_body_are_preserved() {
        let content = "---\ntitle: Test\n---\n\nBefore\n\n---\n\nAfter";
        let result = extract_frontmatter(content).unwrap();
        assert_eq!(result.body(), "Before\n\n---\n\nAfter");
    }

    #[test]
    fn test_closing_delimiter_must_be_whole_line() {
        let content = "---\ntitle: a --- b\n--- \n----\n---\nBody";
        let result = extract_frontmatter(content).unwrap();
        assert_eq!(result.get_str("title"), Some("a --- b"));
        assert_eq!(result.body(), "Body");
    }

    // ------------------------------------------------------------------------
    // Field lines
    // ------------------------------------------------------------------------

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let content = "---\n# a comment\n\n   \ntitle: Kept\n  # indented comment\n---\nBody";
        let result = extract_frontmatter(content).unwrap();
        assert_eq!(result.fields().len(), 1);
        assert_eq!(result.get_str("title"), Some("Kept"));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let content = "---\nno colon here\n: empty key\ntitle: Fine\n---\nBody";
        let result = extract_frontmatter(content).unwrap();
        assert_eq!(result.fields().len(), 1);
        assert_eq!(result.get_str("title"), Some("Fine"));
    }

    #[test]
    fn test_split_at_first_colon() {
        let content = "---\ntitle: Rust: The Good Parts\ndate: 2024-01-15T10:30:00Z\n---\n";
        let result = extract_frontmatter(content).unwrap();
        assert_eq!(result.get_str("title"), Some("Rust: The Good Parts"));
        assert_eq!(result.get_str("date"), Some("2024-01-15T10:30:00Z"));
    }

    #[test]
    fn test_scalar_strips_all_quotes() {
        let content = "---\ntitle: \"It's 'quoted'\"\n---\n";
        let result = extract_frontmatter(content).unwrap();
        assert_eq!(result.get_str("title"), Some("Its quoted"));
    }

    #[test]
    fn test_empty_value_is_empty_scalar() {
        let result = extract_frontmatter("---\ncategory:\n---\n").unwrap();
        assert_eq!(result.get_str("category"), Some(""));
        assert!(result.get_list("category").is_empty());
    }

    #[test]
    fn test_repeated_key_last_value_wins() {
        let content = "---\ntitle: First\ndate: 2024-01-01\ntitle: Second\n---\n";
        let result = extract_frontmatter(content).unwrap();
        assert_eq!(result.get_str("title"), Some("Second"));
        let keys: Vec<_> = result.fields().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["title", "date"]);
    }

    // ------------------------------------------------------------------------
    // Lists
    // ------------------------------------------------------------------------

    #[test]
    fn test_list_items_trimmed_and_unquoted() {
        let content = "---\ntags: [ rust , 'async', \"web\" ]\n---\n";
        let result = extract_frontmatter(content).unwrap();
        assert_eq!(result.get_list("tags"), vec!["rust", "async", "web"]);
    }

    #[test]
    fn test_empty_list() {
        let result = extract_frontmatter("---\ntags: []\n---\n").unwrap();
        assert_eq!(
            result.fields().get("tags"),
            Some(&FieldValue::List(Vec::new()))
        );
    }

    #[test]
    fn test_list_drops_empty_elements() {
        let result = extract_frontmatter("---\ntags: [a,,b, '', \"\" ]\n---\n").unwrap();
        assert_eq!(result.get_list("tags"), vec!["a", "b"]);
    }

    #[test]
    fn test_list_splits_quoted_commas() {
        let result = extract_frontmatter("---\ntags: [\"a, b\", c]\n---\n").unwrap();
        assert_eq!(result.get_list("tags"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_bracketed_value_on_scalar_key_stays_scalar() {
        let result = extract_frontmatter("---\ntitle: [Draft]\n---\n").unwrap();
        assert_eq!(result.get_str("title"), Some("[Draft]"));
    }

    #[test]
    fn test_unbracketed_list_key_is_scalar() {
        let result = extract_frontmatter("---\ntags: solo\n---\n").unwrap();
        assert_eq!(result.get_str("tags"), Some("solo"));
        assert_eq!(result.get_list("tags"), vec!["solo"]);
    }

    #[test]
    fn test_authors_list() {
        let result = extract_frontmatter("---\nauthors: [Alice, Bob]\n---\n").unwrap();
        assert_eq!(result.get_list("authors"), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Scalar("x".into()).to_string(), "x");
        assert_eq!(
            FieldValue::List(vec!["a".into(), "b".into()]).to_string(),
            "[a, b]"
        );
    }

    #[test]
    fn test_unicode_fields() {
        let content = "---\ntitle: 代码高亮\ncategory: 技术\n---\n\n本文";
        let result = extract_frontmatter(content).unwrap();
        assert_eq!(result.get_str("title"), Some("代码高亮"));
        assert_eq!(result.get_str("category"), Some("技术"));
        assert_eq!(result.body(), "本文");
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    fn serialize(fields: &[(String, String)], body: &str) -> String {
        let mut out = String::from("---\n");
        for (key, value) in fields {
            out.push_str(&format!("{key}: {value}\n"));
        }
        out.push_str("---\n");
        out.push_str(body);
        out
    }

    proptest! {
        #[test]
        fn test_scalar_fields_roundtrip(
            fields in proptest::collection::btree_map(
                "[a-z][a-z_]{0,10}",
                "[A-Za-z0-9 ,.!?:'\"-]{0,24}",
                0..8,
            ),
            body in "[A-Za-z0-9 .\n]{0,60}",
        ) {
            let fields: Vec<(String, String)> = fields
                .into_iter()
                .filter(|(k, _)| k != "tags" && k != "authors")
                .collect();
            let document = serialize(&fields, &body);
            let result = extract_frontmatter(&document).unwrap();

            prop_assert_eq!(result.fields().len(), fields.len());
            for (key, value) in &fields {
                let expected = value.trim().replace(QUOTES, "");
                prop_assert_eq!(result.get_str(key), Some(expected.as_str()));
            }
            prop_assert_eq!(result.body(), body.trim());
        }

        #[test]
        fn test_without_leading_delimiter_is_none(
            prefix in "[A-Za-z0-9 #]{1,10}",
            rest in "[A-Za-z0-9 :\n-]{0,60}",
        ) {
            let document = format!("{prefix}\n---\ntitle: x\n---\n{rest}");
            prop_assert!(extract_frontmatter(&document).is_none());
        }
    }
}

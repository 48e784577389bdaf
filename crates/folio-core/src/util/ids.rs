//! Heading anchor-id utilities.
//!
//! Anchor ids let in-page links and hash deep links (`#/p/1#setup`) target a
//! rendered heading. Derivation lower-cases the heading text and collapses
//! every run of characters outside ASCII word characters and CJK unified
//! ideographs into a single hyphen.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

static NON_ANCHOR_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_\x{4e00}-\x{9fa5}]+").expect("Invalid anchor character regex")
});

/// Derive an anchor id from heading text.
///
/// Leading and trailing hyphens are kept, so `"Why?"` becomes `"why-"`.
///
/// # Examples
///
/// ```
/// use folio_core::util::ids::anchor_id;
///
/// assert_eq!(anchor_id("Getting Started"), "getting-started");
/// assert_eq!(anchor_id("Step 1: Install & Run"), "step-1-install-run");
/// assert_eq!(anchor_id("安装 Rust"), "安装-rust");
/// ```
pub fn anchor_id(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ANCHOR_CHARS.replace_all(&lowered, "-").into_owned()
}

/// Issues unique anchor ids within one document.
///
/// The first heading with a given slug keeps it unchanged; later headings
/// with the same slug get `-1`, `-2`, ... appended. A suffixed id that
/// collides with an id already issued is skipped.
///
/// # Examples
///
/// ```
/// use folio_core::util::ids::AnchorIds;
///
/// let mut ids = AnchorIds::new();
/// assert_eq!(ids.issue("Usage"), "usage");
/// assert_eq!(ids.issue("Usage"), "usage-1");
/// assert_eq!(ids.issue("usage"), "usage-2");
/// ```
#[derive(Debug, Default, Clone)]
pub struct AnchorIds {
    counts: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl AnchorIds {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a unique anchor id for the given heading text.
    pub fn issue(&mut self, text: &str) -> String {
        let base = anchor_id(text);
        let count = self.counts.entry(base.clone()).or_insert(0);

        let mut candidate = if *count == 0 {
            base.clone()
        } else {
            format!("{base}-{count}")
        };
        while self.issued.contains(&candidate) {
            *count += 1;
            candidate = format!("{base}-{count}");
        }
        *count += 1;

        self.issued.insert(candidate.clone());
        candidate
    }

    /// Number of ids issued so far.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    /// Whether no ids have been issued.
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

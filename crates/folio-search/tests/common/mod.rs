//! Common test utilities: an in-memory article corpus.

use std::sync::Arc;

use folio_articles::{ArticleMetadata, ArticleRepository, Catalog, MemorySource};
use folio_search::ArticleSearch;

/// Catalog ids of the standard corpus, in catalog order.
pub const CORPUS_IDS: [&str; 4] = ["1", "2", "3", "4"];

/// One corpus entry: catalog metadata plus the raw document, if any.
pub struct Entry {
    pub meta: ArticleMetadata,
    pub document: Option<String>,
}

impl Entry {
    pub fn new(id: &str, title: &str, description: &str, document: &str) -> Self {
        Self {
            meta: ArticleMetadata::new(id, format!("{id}.md"), title, description),
            document: Some(document.to_string()),
        }
    }

    /// A catalog entry whose document is missing from storage.
    pub fn missing(id: &str, title: &str) -> Self {
        Self {
            meta: ArticleMetadata::new(id, format!("{id}.md"), title, ""),
            document: None,
        }
    }
}

/// Test harness holding the source and a repository over it.
pub struct TestCorpus {
    pub source: MemorySource,
    pub repo: ArticleRepository,
}

impl TestCorpus {
    /// Build a corpus from entries.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let catalog = Catalog {
            articles: entries.iter().map(|e| e.meta.clone()).collect(),
        };
        let mut source = MemorySource::new().with_document(
            "articles/files.json",
            serde_json::to_string(&catalog).unwrap(),
        );
        for entry in entries {
            if let Some(doc) = entry.document {
                source = source.with_document(format!("articles/{}", entry.meta.filename), doc);
            }
        }
        let repo = ArticleRepository::new(Arc::new(source.clone()));
        Self { source, repo }
    }

    /// The standard four-article corpus.
    pub fn standard() -> Self {
        Self::from_entries(vec![
            Entry::new(
                "1",
                "Getting started",
                "First steps",
                "---\ntitle: Getting Started with Rust\ndate: 2024-01-10\ncategory: Tutorial\ntags: [rust, beginner]\nauthors: [Ada]\n---\n# Install\n\nRun `rustup`.\n\n```bash\ncurl https://sh.rustup.rs | sh\n```\n",
            ),
            Entry::new(
                "2",
                "Async notes",
                "",
                "---\ntitle: Async in Practice\ndescription: Notes on tokio and futures\ndate: 2024-03-05\nupdated: 2024-04-01\ntags: [rust, async]\n---\n## Tasks\n\nSpawning with `tokio::spawn`.\n\n## Tasks\n\nJoining handles.\n",
            ),
            Entry::new(
                "3",
                "CSS palettes",
                "Highlight themes",
                "---\ndate: 2023-11-20\ncategory: Design\n---\nColors for **light** and dark modes.\n\n```unknownlang\npalette := dark\n```\n",
            ),
            Entry::new("4", "Broken", "", "This document has no frontmatter."),
        ])
    }

    pub fn search(&self) -> ArticleSearch {
        ArticleSearch::new(self.repo.clone())
    }
}

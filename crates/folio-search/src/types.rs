//! Common types for article search.

use serde::{Deserialize, Serialize};

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default result limit.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Snippet length in characters.
    #[serde(default = "default_snippet_length")]
    pub snippet_length: usize,
}

fn default_limit() -> usize {
    10
}

fn default_snippet_length() -> usize {
    160
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            snippet_length: default_snippet_length(),
        }
    }
}

/// Article fields a query can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Id,
    Title,
    Description,
    Content,
    Category,
    Tags,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_default() {
        let config = SearchConfig::default();
        assert_eq!(config.limit, 10);
        assert_eq!(config.snippet_length, 160);
    }

    #[test]
    fn test_search_config_deserialization_with_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"limit": 3}"#).unwrap();
        assert_eq!(config.limit, 3);
        assert_eq!(config.snippet_length, 160);
    }

    #[test]
    fn test_match_field_serialization() {
        let json = serde_json::to_string(&MatchField::Description).unwrap();
        assert_eq!(json, "\"description\"");
    }
}

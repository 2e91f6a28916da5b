//! Suggestion types returned by the ranking engine.

use serde::{Deserialize, Serialize};

/// A single ranked catalog candidate for a free-text description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Catalog code.
    pub code: String,
    /// Catalog description for the code.
    pub description: String,
    /// Blended lexical-similarity score in `[0, 1]`, rounded to
    /// 3 decimal places.
    pub confidence: f64,
}

/// Ordered suggestion list for one query.
///
/// `suggestions` is sorted by confidence descending; ties keep the
/// catalog's code-ascending order. `query` echoes the normalized
/// (trimmed, lowercased) input and is absent only for the empty-input
/// case, which is the only case that sets `error`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<Suggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SuggestionResponse {
    /// Response for an empty or whitespace-only description.
    pub fn empty_input() -> Self {
        Self {
            suggestions: Vec::new(),
            query: None,
            error: Some("Empty description provided".to_string()),
        }
    }

    /// Response carrying ranked suggestions for a normalized query.
    pub fn ranked(suggestions: Vec<Suggestion>, query: String) -> Self {
        Self {
            suggestions,
            query: Some(query),
            error: None,
        }
    }
}

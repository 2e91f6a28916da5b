//! Request and response types, plus free-text request parsing.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use hsn_model::{SuggestionResponse, ValidationOutcome};
use hsn_suggest::DEFAULT_MAX_RESULTS;
use hsn_validate::{MAX_CODE_LEN, MIN_CODE_LEN};

/// An operation against the catalog.
///
/// Serializes with an `action` tag and lowercase variant names, so the
/// wire shape matches the `{action, query}` call convention hosting
/// agents already use:
/// `{"action": "validate", "query": "01, 0101"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Request {
    /// Validate a comma-separated batch of candidate codes.
    Validate { query: String },
    /// Suggest codes for a free-text product description.
    Suggest {
        query: String,
        #[serde(default = "default_max_results")]
        max_results: usize,
    },
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

/// Structured result of one dispatched request.
///
/// Untagged on the wire: a validation response is the outcome map
/// itself, a suggestion response is the `{suggestions, query}` object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Validation(BTreeMap<String, ValidationOutcome>),
    Suggestion(SuggestionResponse),
}

/// Turn raw user text into a [`Request`].
///
/// Heuristics, in order:
///
/// 1. An `action:` prefix anywhere in the text selects `validate` or
///    `suggest` explicitly (first word after the prefix, case
///    insensitive).
/// 2. A `query:` prefix supplies the query verbatim (rest of the line,
///    trimmed) and keeps the selected action.
/// 3. Otherwise the text is auto-detected: if it contains any digit it
///    is a validation request, with every standalone 2-8 digit token
///    extracted and comma-joined (or the whole trimmed text when no
///    token matches); pure text becomes a suggestion request.
pub fn parse_request(raw: &str) -> Request {
    let lower = raw.to_lowercase();

    let mut action = Action::Validate;
    if let Some((_, rest)) = lower.split_once("action:")
        && let Some(word) = rest.split_whitespace().next()
    {
        match word {
            "validate" => action = Action::Validate,
            "suggest" => action = Action::Suggest,
            _ => {}
        }
    }

    let query;
    if lower.contains("query:") {
        query = extract_query(raw);
    } else if raw.chars().any(|c| c.is_ascii_digit()) {
        action = Action::Validate;
        let codes = extract_codes(raw);
        query = if codes.is_empty() {
            raw.trim().to_string()
        } else {
            codes.join(", ")
        };
    } else {
        action = Action::Suggest;
        query = raw.trim().to_string();
    }

    tracing::debug!(?action, query = %query, "parsed free-text request");

    match action {
        Action::Validate => Request::Validate { query },
        Action::Suggest => Request::Suggest {
            query,
            max_results: DEFAULT_MAX_RESULTS,
        },
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Validate,
    Suggest,
}

/// Rest of the line after a `query:` prefix, trimmed.
fn extract_query(text: &str) -> String {
    let Ok(re) = Regex::new(r"(?i)query:\s*([^\n\r]+)") else {
        return String::new();
    };
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Standalone tokens that look like HSN codes (2-8 digits).
fn extract_codes(text: &str) -> Vec<String> {
    let pattern = format!(r"\b\d{{{MIN_CODE_LEN},{MAX_CODE_LEN}}}\b");
    let Ok(re) = Regex::new(&pattern) else {
        return Vec::new();
    };
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

//! Blended lexical scoring and ranking.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use rapidfuzz::distance::indel;

use hsn_model::{Catalog, Suggestion, SuggestionResponse};

/// Weight of the sequence-similarity signal in the blended score.
pub const SIMILARITY_WEIGHT: f64 = 0.7;

/// Weight of the keyword-overlap signal in the blended score.
pub const OVERLAP_WEIGHT: f64 = 0.3;

/// Exclusive minimum score: entries scoring exactly this are rejected.
pub const MIN_SCORE: f64 = 0.1;

/// Default number of suggestions returned.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Rank catalog entries by relevance to a free-text description.
///
/// Returns at most `max_results` suggestions sorted by confidence
/// descending; ties keep the catalog's code-ascending order. Confidence
/// is rounded to 3 decimal places. An empty or whitespace-only
/// description yields an `error` response with no query echoed; that is
/// the only error case — zero matches past the threshold is an ordinary
/// empty result.
pub fn suggest(catalog: &Catalog, description: &str, max_results: usize) -> SuggestionResponse {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return SuggestionResponse::empty_input();
    }

    let query = trimmed.to_lowercase();
    let query_words: BTreeSet<&str> = query.split_whitespace().collect();

    let mut suggestions = Vec::new();
    for (code, entry_description) in catalog.iter() {
        if entry_description.is_empty() {
            continue;
        }

        let entry = entry_description.to_lowercase();
        // Threshold the rounded value so returned confidences are
        // strictly above MIN_SCORE even when a raw score rounds down
        // onto the boundary.
        let confidence = round3(blended_score(&query, &query_words, &entry));
        if confidence > MIN_SCORE {
            suggestions.push(Suggestion {
                code: code.to_string(),
                description: entry_description.to_string(),
                confidence,
            });
        }
    }

    // Stable sort: equal confidences stay in code-ascending order.
    suggestions.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
    suggestions.truncate(max_results);

    tracing::debug!(
        query = %query,
        returned = suggestions.len(),
        "ranked suggestion query"
    );

    SuggestionResponse::ranked(suggestions, query)
}

/// Blend of sequence similarity and keyword overlap, in `[0, 1]`.
fn blended_score(query: &str, query_words: &BTreeSet<&str>, entry: &str) -> f64 {
    let similarity = indel::normalized_similarity(query.chars(), entry.chars());

    let entry_words: BTreeSet<&str> = entry.split_whitespace().collect();
    let shared = query_words.intersection(&entry_words).count();
    let overlap = shared as f64 / query_words.len().max(1) as f64;

    SIMILARITY_WEIGHT * similarity + OVERLAP_WEIGHT * overlap
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_catalog() -> Catalog {
        Catalog::from_pairs([
            ("0101", "live horses"),
            ("0102", "live bovine animals"),
            ("0103", "live swine"),
            ("0105", "live poultry"),
            ("1701", "cane or beet sugar"),
        ])
    }

    #[test]
    fn empty_description_is_the_only_error_case() {
        let response = suggest(&fixture_catalog(), "", DEFAULT_MAX_RESULTS);
        assert!(response.suggestions.is_empty());
        assert!(response.query.is_none());
        assert_eq!(response.error.as_deref(), Some("Empty description provided"));

        let response = suggest(&fixture_catalog(), "   \t", DEFAULT_MAX_RESULTS);
        assert_eq!(response.error.as_deref(), Some("Empty description provided"));
    }

    #[test]
    fn query_is_normalized() {
        let response = suggest(&fixture_catalog(), "  Live Horses  ", DEFAULT_MAX_RESULTS);
        assert_eq!(response.query.as_deref(), Some("live horses"));
        assert!(response.error.is_none());
    }

    #[test]
    fn exact_description_match_scores_one() {
        let response = suggest(&fixture_catalog(), "live horses", DEFAULT_MAX_RESULTS);
        let top = &response.suggestions[0];
        assert_eq!(top.code, "0101");
        assert_eq!(top.confidence, 1.0);
    }

    #[test]
    fn unrelated_text_scores_below_threshold() {
        // No shared characters or words with any entry.
        let response = suggest(&fixture_catalog(), "zzzz", DEFAULT_MAX_RESULTS);
        assert!(response.suggestions.is_empty());
        assert!(response.error.is_none());
        assert_eq!(response.query.as_deref(), Some("zzzz"));
    }

    #[test]
    fn results_are_capped_and_non_increasing() {
        let response = suggest(&fixture_catalog(), "live animals", 3);
        assert!(response.suggestions.len() <= 3);
        for pair in response.suggestions.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
        for suggestion in &response.suggestions {
            assert!(suggestion.confidence > MIN_SCORE);
            assert!(suggestion.confidence <= 1.0);
        }
    }

    #[test]
    fn ties_keep_code_ascending_order() {
        let catalog = Catalog::from_pairs([("02", "wool"), ("01", "wool")]);
        let response = suggest(&catalog, "wool", DEFAULT_MAX_RESULTS);
        let codes: Vec<&str> = response
            .suggestions
            .iter()
            .map(|s| s.code.as_str())
            .collect();
        assert_eq!(codes, vec!["01", "02"]);
    }

    #[test]
    fn entries_without_descriptions_are_ignored() {
        let catalog = Catalog::from_pairs([("01", ""), ("0101", "live horses")]);
        let response = suggest(&catalog, "live horses", DEFAULT_MAX_RESULTS);
        assert_eq!(response.suggestions.len(), 1);
        assert_eq!(response.suggestions[0].code, "0101");
    }

    #[test]
    fn suggestion_is_idempotent() {
        let catalog = fixture_catalog();
        assert_eq!(
            suggest(&catalog, "live poultry chickens", DEFAULT_MAX_RESULTS),
            suggest(&catalog, "live poultry chickens", DEFAULT_MAX_RESULTS)
        );
    }

    #[test]
    fn confidence_is_rounded_to_three_decimals() {
        let response = suggest(&fixture_catalog(), "live poultry chickens", DEFAULT_MAX_RESULTS);
        for suggestion in &response.suggestions {
            let scaled = suggestion.confidence * 1000.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "confidence {} not rounded",
                suggestion.confidence
            );
        }
    }
}

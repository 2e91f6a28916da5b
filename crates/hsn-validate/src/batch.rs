//! Batch validation with hierarchical ancestor fallback.

use std::collections::BTreeMap;

use hsn_model::{Catalog, ValidationOutcome};

use crate::format::check_format;

/// Validate a comma-separated batch of candidate codes.
///
/// Each piece is trimmed; empty pieces are silently discarded and
/// contribute no entry, so an empty or whitespace-only query yields an
/// empty map rather than an error. Map keys are the original trimmed
/// candidate strings; a candidate repeated within one query keeps only
/// its last outcome (plain map semantics).
pub fn validate_batch(catalog: &Catalog, query: &str) -> BTreeMap<String, ValidationOutcome> {
    let mut outcomes = BTreeMap::new();

    for raw in query.split(',') {
        let candidate = raw.trim();
        if candidate.is_empty() {
            continue;
        }
        outcomes.insert(candidate.to_string(), validate_code(catalog, candidate));
    }

    tracing::debug!(
        candidates = outcomes.len(),
        valid = outcomes.values().filter(|o| o.valid).count(),
        "validated code batch"
    );

    outcomes
}

/// Validate a single trimmed candidate code.
pub fn validate_code(catalog: &Catalog, code: &str) -> ValidationOutcome {
    if let Err(violation) = check_format(code) {
        return ValidationOutcome::format_error(violation);
    }

    if let Some(description) = catalog.describe(code) {
        return ValidationOutcome::valid(code, description);
    }

    match nearest_ancestor(catalog, code) {
        Some(ancestor) => ValidationOutcome::nearest_parent(ancestor, catalog.describe(ancestor)),
        None => ValidationOutcome::not_found(),
    }
}

/// Longest proper prefix of `code` that is a catalog member.
///
/// Strips one trailing character per step, so the first hit is the
/// longest valid prefix; terminates in at most `len - 1` steps. `code`
/// has passed format checks and is ASCII digits only, so byte slicing
/// cannot split a character.
fn nearest_ancestor<'a>(catalog: &Catalog, code: &'a str) -> Option<&'a str> {
    let mut prefix = &code[..code.len() - 1];
    while !prefix.is_empty() {
        if catalog.contains(prefix) {
            return Some(prefix);
        }
        prefix = &prefix[..prefix.len() - 1];
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_catalog() -> Catalog {
        Catalog::from_pairs([
            ("01", "LIVE ANIMALS"),
            ("0101", "LIVE HORSES, ASSES, MULES AND HINNIES"),
            ("010110", "PURE-BRED BREEDING ANIMALS"),
            ("17019930", "CANE SUGAR"),
        ])
    }

    #[test]
    fn exact_member_is_valid() {
        let outcome = validate_code(&fixture_catalog(), "0101");
        assert!(outcome.valid);
        assert_eq!(outcome.nearest.as_deref(), Some("0101"));
        assert_eq!(
            outcome.description.as_deref(),
            Some("LIVE HORSES, ASSES, MULES AND HINNIES")
        );
        assert!(outcome.error.is_none());
    }

    #[test]
    fn missing_code_falls_back_to_longest_ancestor() {
        // 01011010 is absent; 010110 is the longest valid prefix.
        let outcome = validate_code(&fixture_catalog(), "01011010");
        assert!(!outcome.valid);
        assert_eq!(outcome.nearest.as_deref(), Some("010110"));
        assert_eq!(
            outcome.description.as_deref(),
            Some("PURE-BRED BREEDING ANIMALS")
        );
        assert_eq!(
            outcome.error.as_deref(),
            Some("Code not found, but parent '010110' exists")
        );
    }

    #[test]
    fn missing_code_without_ancestor() {
        let outcome = validate_code(&fixture_catalog(), "999999");
        assert!(!outcome.valid);
        assert!(outcome.nearest.is_none());
        assert_eq!(
            outcome.error.as_deref(),
            Some("Code not found and no valid parent codes exist")
        );
    }

    #[test]
    fn batch_discards_empty_pieces() {
        let outcomes = validate_batch(&fixture_catalog(), "01, , 0101,");
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.contains_key("01"));
        assert!(outcomes.contains_key("0101"));
    }

    #[test]
    fn empty_and_whitespace_queries_yield_empty_maps() {
        assert!(validate_batch(&fixture_catalog(), "").is_empty());
        assert!(validate_batch(&fixture_catalog(), "   ").is_empty());
        assert!(validate_batch(&fixture_catalog(), " , ,, ").is_empty());
    }

    #[test]
    fn keys_are_original_trimmed_candidates() {
        let outcomes = validate_batch(&fixture_catalog(), "  0101  , invalid_code");
        assert!(outcomes.contains_key("0101"));
        assert!(outcomes.contains_key("invalid_code"));
        assert!(!outcomes.contains_key("  0101  "));
    }

    #[test]
    fn malformed_code_does_not_abort_the_batch() {
        let outcomes = validate_batch(&fixture_catalog(), "01, invalid_code, 0101");
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes["01"].valid);
        assert!(outcomes["0101"].valid);
        assert_eq!(
            outcomes["invalid_code"].error.as_deref(),
            Some("Format error: HSN code must be numeric")
        );
    }
}

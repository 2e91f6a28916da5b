#![deny(unsafe_code)]

//! Suggestion ranking for free-text product descriptions.
//!
//! Every catalog entry with a non-empty description is scored against
//! the query with a blend of two lexical signals:
//!
//! - **Sequence similarity**: Indel normalized similarity, which is
//!   `2 * LCS / (len_a + len_b)` — the classic sequence-matcher ratio,
//!   symmetric and bounded in `[0, 1]`.
//! - **Keyword overlap**: shared whitespace-delimited words relative to
//!   the query's word count.
//!
//! Scoring is O(catalog size) per call, which is fine for a reference
//! table of tens of thousands of entries. Larger catalogs would need an
//! inverted index; that is out of scope here.

pub mod score;

pub use crate::score::{
    DEFAULT_MAX_RESULTS, MIN_SCORE, OVERLAP_WEIGHT, SIMILARITY_WEIGHT, suggest,
};

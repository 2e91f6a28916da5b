#![deny(unsafe_code)]

//! HSN code validation.
//!
//! Validation runs in three stages per candidate:
//!
//! 1. **Format**: digit-only, 2-8 characters. Violations are reported
//!    inline, never thrown; see [`format`].
//! 2. **Existence**: exact catalog membership.
//! 3. **Hierarchy**: for a well-formed code the catalog does not know,
//!    walk up the prefix hierarchy (strip one trailing digit at a time)
//!    to the nearest valid ancestor. The first hit is the longest valid
//!    proper prefix.
//!
//! Batch queries are comma-separated; a malformed code in a batch never
//! prevents the rest of the batch from being validated.

pub mod batch;
pub mod format;

pub use crate::batch::{validate_batch, validate_code};
pub use crate::format::{FormatViolation, MAX_CODE_LEN, MIN_CODE_LEN, check_format};

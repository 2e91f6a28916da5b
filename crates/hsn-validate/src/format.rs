//! Structural validation of candidate codes.

use serde::Serialize;

/// Minimum HSN code length (chapter level).
pub const MIN_CODE_LEN: usize = 2;

/// Maximum HSN code length (tariff-item level).
pub const MAX_CODE_LEN: usize = 8;

/// A structural problem with a candidate code.
///
/// Surfaced to callers as `"Format error: <message>"` inside the
/// per-code outcome, never as a batch-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormatViolation {
    /// Candidate is empty. Unreachable through batch validation, which
    /// discards empty pieces before format checks run.
    Empty,
    /// Candidate contains a non-digit character.
    NonNumeric,
    /// Fewer than [`MIN_CODE_LEN`] digits.
    TooShort,
    /// More than [`MAX_CODE_LEN`] digits.
    TooLong,
}

impl std::fmt::Display for FormatViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty code"),
            Self::NonNumeric => write!(f, "HSN code must be numeric"),
            Self::TooShort => {
                write!(f, "HSN code too short (minimum {MIN_CODE_LEN} digits)")
            }
            Self::TooLong => {
                write!(f, "HSN code too long (maximum {MAX_CODE_LEN} digits)")
            }
        }
    }
}

/// Check that `code` is a digit-only string of valid length.
pub fn check_format(code: &str) -> Result<(), FormatViolation> {
    if code.is_empty() {
        return Err(FormatViolation::Empty);
    }
    if !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(FormatViolation::NonNumeric);
    }
    if code.len() < MIN_CODE_LEN {
        return Err(FormatViolation::TooShort);
    }
    if code.len() > MAX_CODE_LEN {
        return Err(FormatViolation::TooLong);
    }
    Ok(())
}

//! Per-code validation outcomes.

use serde::{Deserialize, Serialize};

/// Result of validating one candidate code.
///
/// Format violations and unknown codes are reported here as data, never
/// as errors thrown to the caller: one malformed code in a batch must not
/// prevent the rest of the batch from being validated.
///
/// Invariants:
/// - `valid == true` implies `error` is `None` and `nearest` is the code
///   itself.
/// - `valid == false` implies `error` is `Some`; `nearest` is then either
///   a strict proper prefix of the input that exists in the catalog, or
///   `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the code exists in the catalog exactly as given.
    pub valid: bool,
    /// The code itself when valid, otherwise the nearest valid ancestor.
    pub nearest: Option<String>,
    /// Catalog description of `nearest`, when one exists.
    pub description: Option<String>,
    /// Human-readable reason when the code is not valid.
    pub error: Option<String>,
}

impl ValidationOutcome {
    /// Outcome for a code found in the catalog.
    pub fn valid(code: &str, description: &str) -> Self {
        Self {
            valid: true,
            nearest: Some(code.to_string()),
            description: Some(description.to_string()),
            error: None,
        }
    }

    /// Outcome for a code that failed structural validation.
    pub fn format_error(reason: impl std::fmt::Display) -> Self {
        Self {
            valid: false,
            nearest: None,
            description: None,
            error: Some(format!("Format error: {reason}")),
        }
    }

    /// Outcome for a missing code whose nearest ancestor exists.
    pub fn nearest_parent(ancestor: &str, description: Option<&str>) -> Self {
        Self {
            valid: false,
            nearest: Some(ancestor.to_string()),
            description: description.map(String::from),
            error: Some(format!("Code not found, but parent '{ancestor}' exists")),
        }
    }

    /// Outcome for a missing code with no valid ancestor at all.
    pub fn not_found() -> Self {
        Self {
            valid: false,
            nearest: None,
            description: None,
            error: Some("Code not found and no valid parent codes exist".to_string()),
        }
    }
}

#![deny(unsafe_code)]

pub mod catalog;
pub mod outcome;
pub mod suggestion;

pub use catalog::{Catalog, CatalogEntry};
pub use outcome::ValidationOutcome;
pub use suggestion::{Suggestion, SuggestionResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_outcome_serializes_with_null_error() {
        let outcome = ValidationOutcome::valid("0101", "LIVE HORSES, ASSES, MULES AND HINNIES");
        let json = serde_json::to_value(&outcome).expect("serialize outcome");
        assert_eq!(json["valid"], true);
        assert_eq!(json["nearest"], "0101");
        assert!(json["error"].is_null());
    }

    #[test]
    fn suggestion_response_omits_absent_fields() {
        let response = SuggestionResponse {
            suggestions: vec![Suggestion {
                code: "0101".to_string(),
                description: "LIVE HORSES".to_string(),
                confidence: 0.7,
            }],
            query: Some("live horses".to_string()),
            error: None,
        };
        let json = serde_json::to_string(&response).expect("serialize response");
        assert!(!json.contains("error"));
        assert!(json.contains("\"query\":\"live horses\""));
    }
}

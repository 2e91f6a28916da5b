//! Plain-text rendering of responses for chat-style display.

use crate::request::Response;

/// Render a response as display text.
///
/// Validation results list each code with its status, description, and
/// nearest-parent hint; suggestions are numbered with percentage
/// confidence. The structured [`Response`] stays the machine-readable
/// form; this is only for surfaces that show text.
pub fn render(response: &Response) -> String {
    match response {
        Response::Validation(outcomes) => {
            let mut text = String::from("HSN Code Validation Results:\n\n");
            for (code, outcome) in outcomes {
                let status = if outcome.valid { "Valid" } else { "Invalid" };
                text.push_str(&format!("**{code}**: {status}\n"));
                if outcome.valid {
                    text.push_str(&format!(
                        "   Description: {}\n",
                        outcome.description.as_deref().unwrap_or_default()
                    ));
                } else {
                    text.push_str(&format!(
                        "   Error: {}\n",
                        outcome.error.as_deref().unwrap_or_default()
                    ));
                    if let Some(nearest) = outcome.nearest.as_deref() {
                        text.push_str(&format!(
                            "   Suggested: {nearest} - {}\n",
                            outcome.description.as_deref().unwrap_or_default()
                        ));
                    }
                }
                text.push('\n');
            }
            text
        }
        Response::Suggestion(response) => {
            if response.suggestions.is_empty() {
                return "No HSN code suggestions found for the given query.".to_string();
            }
            let mut text = String::from("HSN Code Suggestions:\n\n");
            for (index, suggestion) in response.suggestions.iter().enumerate() {
                text.push_str(&format!(
                    "{}. {} (Confidence: {:.1}%)\n   {}\n\n",
                    index + 1,
                    suggestion.code,
                    suggestion.confidence * 100.0,
                    suggestion.description
                ));
            }
            text
        }
    }
}

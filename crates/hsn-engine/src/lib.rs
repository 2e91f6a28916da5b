#![deny(unsafe_code)]

//! Typed request dispatch over the validation and suggestion engines.
//!
//! A hosting service hands this crate a [`Request`] (or raw user text,
//! via [`parse_request`]) plus a shared [`Catalog`] reference and gets a
//! structured [`Response`] back. Dispatch is an explicit `match` over a
//! tagged variant, not string comparison against a free-form action
//! field.

pub mod render;
pub mod request;

pub use crate::render::render;
pub use crate::request::{Request, Response, parse_request};

pub use hsn_catalog::{CatalogError, load_path, load_reader};
pub use hsn_model::{Catalog, CatalogEntry, Suggestion, SuggestionResponse, ValidationOutcome};
pub use hsn_suggest::{DEFAULT_MAX_RESULTS, suggest};
pub use hsn_validate::{validate_batch, validate_code};

/// Dispatch one request against the shared catalog.
///
/// Pure: identical requests against an unchanged catalog yield
/// identical responses, and concurrent callers need no coordination.
pub fn handle(catalog: &Catalog, request: &Request) -> Response {
    match request {
        Request::Validate { query } => {
            tracing::debug!(query = %query, "dispatching validation request");
            Response::Validation(validate_batch(catalog, query))
        }
        Request::Suggest { query, max_results } => {
            tracing::debug!(query = %query, max_results, "dispatching suggestion request");
            Response::Suggestion(suggest(catalog, query, *max_results))
        }
    }
}

#![deny(unsafe_code)]

//! Catalog loading from tabular (CSV) sources.
//!
//! The on-disk reference table has at least two fields per record:
//! field 0 is the HSN code, field 1 the product description. The first
//! record is always treated as a header and skipped by position, never
//! content-sniffed.

pub mod error;
pub mod loader;

pub use crate::error::CatalogError;
pub use crate::loader::{load_path, load_reader};

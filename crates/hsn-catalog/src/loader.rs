//! CSV catalog loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use hsn_model::Catalog;

use crate::error::CatalogError;

/// Load a catalog from a CSV file on disk.
///
/// Fails with [`CatalogError::Io`] if the file cannot be opened and
/// [`CatalogError::Csv`] if a record cannot be parsed. Loading is
/// idempotent for a given source.
pub fn load_path(path: &Path) -> Result<Catalog, CatalogError> {
    let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
    load_reader(file, &path.display().to_string())
}

/// Load a catalog from any CSV byte stream.
///
/// `source_label` identifies the stream in errors and logs (a file path,
/// a URL, "embedded", ...).
///
/// # Record handling
///
/// - The first record is skipped unconditionally as a header.
/// - Field 0 is the code: trimmed, surrounding double-quotes stripped.
///   Records whose code is empty after trimming are skipped with a
///   warning.
/// - Field 1 is the description: trimmed, empty string when the field
///   is absent.
/// - Duplicate codes: last occurrence wins.
pub fn load_reader<R: Read>(reader: R, source_label: &str) -> Result<Catalog, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut catalog = Catalog::new();
    let mut skipped = 0usize;

    for (index, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| CatalogError::csv(source_label, e.to_string()))?;

        let code = record
            .get(0)
            .map(|field| field.trim().trim_matches('"'))
            .unwrap_or("");
        if code.is_empty() {
            skipped += 1;
            tracing::warn!(
                source = source_label,
                // +2: one for the header, one for zero-based indexing.
                record = index + 2,
                "skipping catalog record with empty code"
            );
            continue;
        }

        let description = record.get(1).map(str::trim).unwrap_or("");
        catalog.insert(code.to_string(), description.to_string());
    }

    tracing::info!(
        source = source_label,
        entries = catalog.len(),
        skipped,
        "loaded HSN catalog"
    );

    Ok(catalog)
}

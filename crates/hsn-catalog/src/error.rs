//! Catalog load errors.
//!
//! These are the only fatal errors in the engine: a catalog that cannot
//! be read or parsed aborts startup, and no partial catalog is served.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog CSV {source_label}: {message}")]
    Csv { source_label: String, message: String },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(source_label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Csv {
            source_label: source_label.into(),
            message: message.into(),
        }
    }
}

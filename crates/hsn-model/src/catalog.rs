//! Reference catalog of HSN codes.
//!
//! The catalog is the single shared lookup table both the validator and
//! the suggester read from. It is built once (from a CSV source or from
//! in-memory pairs in tests) and never mutated afterwards, so concurrent
//! reads need no locking.
//!
//! Codes are hierarchical digit strings: shorter prefixes denote broader
//! categories (chapter `01` contains heading `0101`, which contains
//! subheadings like `010110`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single code/description pair from the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Digit-only HSN code, 2-8 characters.
    pub code: String,
    /// Official product description for the code. May be empty.
    pub description: String,
}

/// Immutable code-to-description table.
///
/// Backed by a `BTreeMap` so iteration order is deterministic
/// (code ascending). That order is what breaks confidence ties in
/// suggestion ranking.
///
/// Duplicate codes follow a last-occurrence-wins policy: a later
/// [`insert`](Catalog::insert) for an existing code replaces the
/// earlier description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `(code, description)` pairs.
    ///
    /// Later pairs overwrite earlier ones for the same code.
    pub fn from_pairs<I, C, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, D)>,
        C: Into<String>,
        D: Into<String>,
    {
        let mut catalog = Self::new();
        for (code, description) in pairs {
            catalog.insert(code.into(), description.into());
        }
        catalog
    }

    /// Insert an entry. Last occurrence wins for duplicate codes.
    pub fn insert(&mut self, code: String, description: String) {
        self.entries.insert(code, description);
    }

    /// Whether `code` is a member of the catalog.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Description for `code`, if the code exists.
    ///
    /// Every catalog member has a description entry (possibly empty),
    /// so `None` means the code itself is unknown.
    pub fn describe(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(code, description)` pairs in code-ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, description)| (code.as_str(), description.as_str()))
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry.code, entry.description);
        }
        catalog
    }
}

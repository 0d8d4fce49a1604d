//! Read-only value copies of catalog state.

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryRecord, DocumentRecord};

/// A full value copy of the catalog, handed to the view projector
/// after every successful mutation.
///
/// The snapshot shares no storage with the live catalog, so a renderer
/// holding one can never race a later mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Categories in insertion order
    pub categories: Vec<CategoryRecord>,
}

impl CatalogSnapshot {
    /// Whether the snapshot has no categories at all
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Document count recomputed from the snapshot itself.
    ///
    /// Used by tests to cross-check `Catalog::total_document_count`.
    pub fn total_documents(&self) -> usize {
        self.categories.iter().map(|c| c.documents.len()).sum()
    }
}

/// One search result: the matching document plus where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Key of the owning category
    pub category_id: String,

    /// Display heading of the owning category
    pub category_label: String,

    /// The matching document (value copy)
    pub document: DocumentRecord,
}

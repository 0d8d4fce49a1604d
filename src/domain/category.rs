//! Named groups of documents.

use serde::{Deserialize, Serialize};

use super::document::DocumentRecord;

/// A named group of documents, e.g. one tab or section in a rendered
/// view. Document order is insertion order and is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Stable key, unique within the catalog
    #[serde(rename = "categoryId")]
    pub category_id: String,

    /// Optional human heading; display falls back to the id when empty
    #[serde(default)]
    pub label: String,

    /// Documents in display order
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
}

impl CategoryRecord {
    /// Create an empty category
    pub fn new(category_id: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            label: String::new(),
            documents: Vec::new(),
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Append a document
    pub fn with_document(mut self, document: DocumentRecord) -> Self {
        self.documents.push(document);
        self
    }

    /// Heading to show for this category
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.category_id
        } else {
            &self.label
        }
    }

    /// Find a document by id (first match)
    pub fn document(&self, document_id: &str) -> Option<&DocumentRecord> {
        self.documents.iter().find(|d| d.id == document_id)
    }

    /// Find a document by id, mutably (first match)
    pub fn document_mut(&mut self, document_id: &str) -> Option<&mut DocumentRecord> {
        self.documents.iter_mut().find(|d| d.id == document_id)
    }

    /// Number of documents in this category
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether this category has no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

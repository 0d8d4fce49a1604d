//! Document metadata records and partial updates.
//!
//! A `DocumentRecord` describes one retrievable document: where it is
//! hosted and what to call the file locally. The record never carries
//! the document's bytes.

use serde::{Deserialize, Serialize};

/// Metadata for a single downloadable document.
///
/// Serialized field names match the seed-table wire format
/// (`domain`, `fileId`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Stable identifier, unique within the owning category
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// Free-text description, searchable; may be empty
    #[serde(default)]
    pub description: String,

    /// Base-URL prefix of the hosting system; drives resolver policy
    #[serde(rename = "domain")]
    pub source_domain: String,

    /// Opaque identifier at the source; empty means not retrievable
    #[serde(rename = "fileId", default)]
    pub external_file_id: String,

    /// Suggested local filename on retrieval
    pub filename: String,
}

impl DocumentRecord {
    /// Create a new record with empty description and file id.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            source_domain: String::new(),
            external_file_id: String::new(),
            filename: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the source domain
    pub fn with_source_domain(mut self, source_domain: impl Into<String>) -> Self {
        self.source_domain = source_domain.into();
        self
    }

    /// Set the external file id
    pub fn with_external_file_id(mut self, external_file_id: impl Into<String>) -> Self {
        self.external_file_id = external_file_id.into();
        self
    }

    /// Set the suggested filename
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }
}

/// A partial update to a `DocumentRecord`.
///
/// Fields left as `None` are untouched on apply. There is deliberately
/// no `id` field: a patch cannot change a document's identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPatch {
    /// New title, if any
    pub title: Option<String>,

    /// New description, if any
    pub description: Option<String>,

    /// New source domain, if any
    #[serde(rename = "domain")]
    pub source_domain: Option<String>,

    /// New external file id, if any
    #[serde(rename = "fileId")]
    pub external_file_id: Option<String>,

    /// New suggested filename, if any
    pub filename: Option<String>,
}

impl DocumentPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Patch the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Patch the source domain
    pub fn with_source_domain(mut self, source_domain: impl Into<String>) -> Self {
        self.source_domain = Some(source_domain.into());
        self
    }

    /// Patch the external file id
    pub fn with_external_file_id(mut self, external_file_id: impl Into<String>) -> Self {
        self.external_file_id = Some(external_file_id.into());
        self
    }

    /// Patch the suggested filename
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Merge this patch into a record, field by field.
    pub fn apply_to(&self, record: &mut DocumentRecord) {
        if let Some(ref title) = self.title {
            record.title = title.clone();
        }
        if let Some(ref description) = self.description {
            record.description = description.clone();
        }
        if let Some(ref source_domain) = self.source_domain {
            record.source_domain = source_domain.clone();
        }
        if let Some(ref external_file_id) = self.external_file_id {
            record.external_file_id = external_file_id.clone();
        }
        if let Some(ref filename) = self.filename {
            record.filename = filename.clone();
        }
    }
}

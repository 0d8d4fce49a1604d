//! The in-memory catalog of document categories.
//!
//! The catalog owns every live `CategoryRecord` and `DocumentRecord`
//! and is the only way to mutate them. After each successful mutation
//! it hands a full value snapshot to the attached view projector;
//! no-op calls (missing category or document) re-project nothing.

use tracing::{debug, warn};

use crate::domain::{CategoryRecord, DocumentPatch, DocumentRecord};
use crate::view::ViewProjector;

use super::snapshot::{CatalogSnapshot, SearchHit};

/// In-memory collection of categories and their documents.
///
/// Categories iterate in insertion order, which is the display order.
/// Backed by a `Vec` with linear key lookup; catalogs are small and
/// mutations are user-driven, so simplicity wins over indexing.
pub struct Catalog {
    /// Categories in insertion order, keys unique
    categories: Vec<CategoryRecord>,

    /// Renderer notified after every successful mutation
    projector: Option<Box<dyn ViewProjector>>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("categories", &self.categories)
            .field("projector", &self.projector.is_some())
            .finish()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog with no projector attached.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            projector: None,
        }
    }

    /// Create a catalog from seeded categories.
    ///
    /// Duplicate keys in the seed follow the same last-write-wins
    /// policy as [`Catalog::add_category`].
    pub fn from_categories(categories: Vec<CategoryRecord>) -> Self {
        let mut catalog = Self::new();
        for category in categories {
            catalog.insert_category(category);
        }
        catalog
    }

    /// Attach the view projector and render the current state once.
    pub fn attach_projector(&mut self, projector: Box<dyn ViewProjector>) {
        self.projector = Some(projector);
        self.reproject();
    }

    /// Full value copy of the current state.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            categories: self.categories.clone(),
        }
    }

    /// Look up a category by key.
    pub fn category(&self, category_id: &str) -> Option<&CategoryRecord> {
        self.categories.iter().find(|c| c.category_id == category_id)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Append a document to an existing category.
    ///
    /// Silently ignored when the category is absent. A duplicate id in
    /// the same category is appended anyway (the caller owns id
    /// uniqueness) but logged: later lookups by that id only ever see
    /// the first match.
    pub fn add_document(&mut self, category_id: &str, document: DocumentRecord) {
        let Some(category) = self.category_mut(category_id) else {
            debug!(category_id, "add_document: no such category");
            return;
        };

        if category.document(&document.id).is_some() {
            warn!(
                category_id,
                document_id = %document.id,
                "duplicate document id appended; lookups resolve to the first match"
            );
        }

        category.documents.push(document);
        self.reproject();
    }

    /// Remove the first document with the given id from a category.
    ///
    /// Returns the removed record, or `None` (and no re-projection)
    /// when the category or document is absent.
    pub fn remove_document(
        &mut self,
        category_id: &str,
        document_id: &str,
    ) -> Option<DocumentRecord> {
        let category = self.category_mut(category_id)?;
        let pos = category.documents.iter().position(|d| d.id == document_id)?;
        let removed = category.documents.remove(pos);
        self.reproject();
        Some(removed)
    }

    /// Merge a partial update into the first document with the given id.
    ///
    /// Fields absent from the patch keep their prior values; the id is
    /// not patchable by construction. No-op when the category or
    /// document is absent.
    pub fn update_document(
        &mut self,
        category_id: &str,
        document_id: &str,
        patch: &DocumentPatch,
    ) {
        let Some(document) = self
            .category_mut(category_id)
            .and_then(|c| c.document_mut(document_id))
        else {
            debug!(category_id, document_id, "update_document: no match");
            return;
        };

        patch.apply_to(document);
        self.reproject();
    }

    /// Insert a category, or wholesale-replace an existing one.
    ///
    /// Overwrite is last-write-wins: the old document list is dropped
    /// entirely. A replaced category keeps its position in the display
    /// order.
    pub fn add_category(&mut self, category: CategoryRecord) {
        self.insert_category(category);
        self.reproject();
    }

    /// Delete a category and all its documents.
    ///
    /// Returns the removed record, or `None` (and no re-projection)
    /// when the key is absent.
    pub fn remove_category(&mut self, category_id: &str) -> Option<CategoryRecord> {
        let pos = self
            .categories
            .iter()
            .position(|c| c.category_id == category_id)?;
        let removed = self.categories.remove(pos);
        self.reproject();
        Some(removed)
    }

    /// Case-insensitive substring search over titles and descriptions.
    ///
    /// Results are in category-then-insertion order. The empty query is
    /// a substring of everything, so it intentionally returns the whole
    /// catalog flattened.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.to_lowercase();

        let mut hits = Vec::new();
        for category in &self.categories {
            for document in &category.documents {
                if document.title.to_lowercase().contains(&needle)
                    || document.description.to_lowercase().contains(&needle)
                {
                    hits.push(SearchHit {
                        category_id: category.category_id.clone(),
                        category_label: category.display_label().to_string(),
                        document: document.clone(),
                    });
                }
            }
        }
        hits
    }

    /// Sum of document counts across all categories.
    ///
    /// Recomputed on every call; there is no cached counter to go
    /// stale.
    pub fn total_document_count(&self) -> usize {
        self.categories.iter().map(|c| c.documents.len()).sum()
    }

    fn category_mut(&mut self, category_id: &str) -> Option<&mut CategoryRecord> {
        self.categories
            .iter_mut()
            .find(|c| c.category_id == category_id)
    }

    /// Insert or replace without re-projecting (seeding path).
    fn insert_category(&mut self, category: CategoryRecord) {
        match self
            .categories
            .iter_mut()
            .find(|c| c.category_id == category.category_id)
        {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
    }

    fn reproject(&self) {
        if let Some(projector) = &self.projector {
            projector.render(&self.snapshot());
        }
    }
}

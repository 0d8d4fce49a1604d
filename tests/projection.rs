//! Re-projection Contract Tests
//!
//! Every successful mutation renders exactly one full snapshot;
//! no-op calls render nothing; attaching a projector renders once.

use std::sync::{Arc, Mutex};

use docshelf::{
    Catalog, CatalogSnapshot, CategoryRecord, DocumentPatch, DocumentRecord, ViewProjector,
};

/// Projector that keeps every snapshot it was handed.
#[derive(Clone, Default)]
struct RecordingProjector {
    rendered: Arc<Mutex<Vec<CatalogSnapshot>>>,
}

impl RecordingProjector {
    fn render_count(&self) -> usize {
        self.rendered.lock().unwrap().len()
    }

    fn last(&self) -> CatalogSnapshot {
        self.rendered.lock().unwrap().last().cloned().unwrap()
    }
}

impl ViewProjector for RecordingProjector {
    fn render(&self, snapshot: &CatalogSnapshot) {
        self.rendered.lock().unwrap().push(snapshot.clone());
    }
}

fn doc(id: &str, title: &str) -> DocumentRecord {
    DocumentRecord::new(id, title)
        .with_source_domain("https://drive.google.com/file/d/")
        .with_external_file_id("file-1")
        .with_filename(format!("{id}.pdf"))
}

fn watched() -> (Catalog, RecordingProjector) {
    let mut catalog = Catalog::from_categories(vec![CategoryRecord::new("left")
        .with_label("Leasing Forms")
        .with_document(doc("lease", "Lease Form"))]);

    let projector = RecordingProjector::default();
    catalog.attach_projector(Box::new(projector.clone()));
    (catalog, projector)
}

#[test]
fn test_attach_renders_once() {
    let (_catalog, projector) = watched();
    assert_eq!(projector.render_count(), 1);
}

#[test]
fn test_each_successful_mutation_renders_once() {
    let (mut catalog, projector) = watched();

    catalog.add_document("left", doc("application", "Application Form"));
    assert_eq!(projector.render_count(), 2);

    catalog.update_document("left", "lease", &DocumentPatch::new().with_title("Lease"));
    assert_eq!(projector.render_count(), 3);

    catalog.add_category(CategoryRecord::new("right"));
    assert_eq!(projector.render_count(), 4);

    catalog.remove_document("left", "application");
    assert_eq!(projector.render_count(), 5);

    catalog.remove_category("right");
    assert_eq!(projector.render_count(), 6);
}

#[test]
fn test_noop_mutations_render_nothing() {
    let (mut catalog, projector) = watched();
    let after_attach = projector.render_count();

    catalog.add_document("missing", doc("x", "X"));
    catalog.remove_document("left", "missing");
    catalog.remove_document("missing", "lease");
    catalog.update_document("left", "missing", &DocumentPatch::new().with_title("X"));
    catalog.remove_category("missing");

    assert_eq!(projector.render_count(), after_attach);
}

#[test]
fn test_rendered_snapshot_is_full_current_state() {
    let (mut catalog, projector) = watched();

    catalog.add_category(CategoryRecord::new("right").with_document(doc("rules", "Rules")));

    let snapshot = projector.last();
    assert_eq!(snapshot.categories.len(), 2);
    assert_eq!(snapshot.total_documents(), 2);
    assert_eq!(snapshot, catalog.snapshot());
}

#[test]
fn test_snapshot_is_isolated_from_later_mutations() {
    let (mut catalog, projector) = watched();

    catalog.add_document("left", doc("application", "Application Form"));
    let captured = projector.last();
    assert_eq!(captured.total_documents(), 2);

    // Mutating afterwards must not reach into the captured copy
    catalog.remove_category("left");
    assert_eq!(captured.total_documents(), 2);
    assert_eq!(catalog.snapshot().total_documents(), 0);
}

#[test]
fn test_projector_sees_empty_catalog_gracefully() {
    let mut catalog = Catalog::new();
    let projector = RecordingProjector::default();
    catalog.attach_projector(Box::new(projector.clone()));

    assert_eq!(projector.render_count(), 1);
    assert!(projector.last().is_empty());
}

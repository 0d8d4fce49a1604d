//! View projection: turning catalog snapshots into a rendered surface.
//!
//! The catalog calls [`ViewProjector::render`] with a full snapshot
//! after every successful mutation (and once when the projector is
//! attached). Rendering is infallible by signature: a projector must
//! cope with an empty catalog and with categories that have no
//! documents.

use crate::catalog::CatalogSnapshot;

/// Renders catalog snapshots to some user-facing surface.
pub trait ViewProjector {
    /// Render the full current state. Must not fail for any
    /// well-formed snapshot.
    fn render(&self, snapshot: &CatalogSnapshot);
}

/// Plain-text projector: one heading per category, one indented line
/// per document.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextProjector;

impl TextProjector {
    pub fn new() -> Self {
        Self
    }

    /// Render a snapshot to a string.
    pub fn render_to_string(snapshot: &CatalogSnapshot) -> String {
        if snapshot.is_empty() {
            return "(no categories)\n".to_string();
        }

        let mut out = String::new();
        for category in &snapshot.categories {
            out.push_str(category.display_label());
            out.push('\n');

            if category.is_empty() {
                out.push_str("  (no documents)\n");
                continue;
            }

            for document in &category.documents {
                out.push_str(&format!("  - {} [{}]", document.title, document.id));
                if !document.description.is_empty() {
                    out.push_str(&format!(": {}", document.description));
                }
                out.push('\n');
            }
        }
        out
    }
}

impl ViewProjector for TextProjector {
    fn render(&self, snapshot: &CatalogSnapshot) {
        print!("{}", Self::render_to_string(snapshot));
    }
}

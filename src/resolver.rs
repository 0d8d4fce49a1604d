//! Download resolution: document reference to concrete retrieval URL.
//!
//! The resolver is pure policy. It performs no I/O; the host turns the
//! resulting URL into an actual download and reports the outcome
//! through a [`NotificationSink`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::DocumentRecord;
use crate::notify::{Level, NotificationSink};

/// Source-domain marker for document-export hosting.
pub const DOC_EXPORT_MARKER: &str = "docs.google.com";

/// Source-domain marker for file-download hosting.
pub const FILE_DOWNLOAD_MARKER: &str = "drive.google.com";

/// Default host for the document-export URL form.
pub const DEFAULT_EXPORT_HOST: &str = "https://docs.google.com";

/// Default host for the file-download URL form.
pub const DEFAULT_DOWNLOAD_HOST: &str = "https://drive.usercontent.google.com";

/// A concrete retrieval action: everything the host needs to fetch the
/// document and tell the user about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalAction {
    /// Final download URL
    pub url: String,

    /// Suggested local filename
    pub filename: String,

    /// Document title, for user feedback
    pub title: String,
}

/// Outcome of resolving a document reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The document can be fetched from this URL
    Fetch(RetrievalAction),

    /// No external file id is recorded; there is nothing to fetch
    NotRetrievable {
        /// Title of the unresolvable document, for the error message
        title: String,
    },
}

/// Maps a document's source domain and external file id to a download
/// URL.
#[derive(Debug, Clone)]
pub struct Resolver {
    export_host: String,
    download_host: String,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Resolver with the default hosts.
    pub fn new() -> Self {
        Self::with_hosts(DEFAULT_EXPORT_HOST, DEFAULT_DOWNLOAD_HOST)
    }

    /// Resolver with custom export and download hosts.
    pub fn with_hosts(export_host: impl Into<String>, download_host: impl Into<String>) -> Self {
        Self {
            export_host: export_host.into(),
            download_host: download_host.into(),
        }
    }

    /// Resolve one document, in precedence order:
    ///
    /// 1. no external file id: not retrievable
    /// 2. document-export domain: PDF export URL
    /// 3. file-download domain: direct download URL
    /// 4. anything else: the stored domain is already the full link
    pub fn resolve(&self, document: &DocumentRecord) -> Resolution {
        if document.external_file_id.is_empty() {
            return Resolution::NotRetrievable {
                title: document.title.clone(),
            };
        }

        let url = if document.source_domain.contains(DOC_EXPORT_MARKER) {
            format!(
                "{}/document/d/{}/export?format=pdf",
                self.export_host, document.external_file_id
            )
        } else if document.source_domain.contains(FILE_DOWNLOAD_MARKER) {
            format!(
                "{}/download?id={}&export=download&authuser=0",
                self.download_host, document.external_file_id
            )
        } else {
            document.source_domain.clone()
        };

        Resolution::Fetch(RetrievalAction {
            url,
            filename: document.filename.clone(),
            title: document.title.clone(),
        })
    }
}

/// Resolve a document and notify the sink exactly once.
///
/// Success raises a success-level toastable message; a missing file id
/// raises an error-level one and logs for diagnostics. Catalog state
/// is never touched.
pub fn dispatch(
    document: &DocumentRecord,
    resolver: &Resolver,
    sink: &dyn NotificationSink,
) -> Option<RetrievalAction> {
    match resolver.resolve(document) {
        Resolution::Fetch(action) => {
            sink.notify(
                &format!("Download started for: {}", action.title),
                Level::Success,
            );
            Some(action)
        }
        Resolution::NotRetrievable { title } => {
            sink.notify(&format!("File not found: {title}"), Level::Error);
            warn!(
                document_id = %document.id,
                filename = %document.filename,
                "no external file id recorded for document"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(domain: &str, file_id: &str) -> DocumentRecord {
        DocumentRecord::new("house-rules", "House Rules")
            .with_source_domain(domain)
            .with_external_file_id(file_id)
            .with_filename("house-rules.pdf")
    }

    #[test]
    fn test_document_export_branch() {
        let resolution = Resolver::new().resolve(&doc("https://docs.google.com/document/d/", "ABC"));

        match resolution {
            Resolution::Fetch(action) => {
                assert_eq!(
                    action.url,
                    "https://docs.google.com/document/d/ABC/export?format=pdf"
                );
                assert_eq!(action.filename, "house-rules.pdf");
                assert_eq!(action.title, "House Rules");
            }
            other => panic!("expected Fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_file_download_branch() {
        let resolution = Resolver::new().resolve(&doc("https://drive.google.com/file/d/", "ABC"));

        match resolution {
            Resolution::Fetch(action) => {
                assert_eq!(
                    action.url,
                    "https://drive.usercontent.google.com/download?id=ABC&export=download&authuser=0"
                );
            }
            other => panic!("expected Fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_domain_is_verbatim_link() {
        let resolution = Resolver::new().resolve(&doc("https://example.com/foo.pdf", "XYZ"));

        match resolution {
            Resolution::Fetch(action) => assert_eq!(action.url, "https://example.com/foo.pdf"),
            other => panic!("expected Fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_id_wins_over_domain_match() {
        let resolution = Resolver::new().resolve(&doc("https://docs.google.com/document/d/", ""));

        assert_eq!(
            resolution,
            Resolution::NotRetrievable {
                title: "House Rules".to_string()
            }
        );
    }

    #[test]
    fn test_custom_hosts() {
        let resolver = Resolver::with_hosts("https://docs.example.test", "https://dl.example.test");
        let resolution = resolver.resolve(&doc("https://drive.google.com/file/d/", "Q"));

        match resolution {
            Resolution::Fetch(action) => {
                assert_eq!(
                    action.url,
                    "https://dl.example.test/download?id=Q&export=download&authuser=0"
                );
            }
            other => panic!("expected Fetch, got {other:?}"),
        }
    }
}

//! Resolver Integration Tests
//!
//! Tests for the resolution precedence order and the
//! one-notification-per-dispatch contract.

use std::sync::Mutex;

use docshelf::{dispatch, DocumentRecord, Level, NotificationSink, Resolution, Resolver};

fn doc(domain: &str, file_id: &str) -> DocumentRecord {
    DocumentRecord::new("house-rules", "House Rules")
        .with_source_domain(domain)
        .with_external_file_id(file_id)
        .with_filename("house-rules.pdf")
}

/// Sink that records every delivered message.
#[derive(Default)]
struct RecordingSink {
    delivered: Mutex<Vec<(String, Level)>>,
}

impl RecordingSink {
    fn messages(&self) -> Vec<(String, Level)> {
        self.delivered.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str, level: Level) {
        self.delivered
            .lock()
            .unwrap()
            .push((message.to_string(), level));
    }
}

#[test]
fn test_document_export_url() {
    let resolution = Resolver::new().resolve(&doc("https://docs.google.com/document/d/", "ABC"));

    match resolution {
        Resolution::Fetch(action) => {
            assert_eq!(
                action.url,
                "https://docs.google.com/document/d/ABC/export?format=pdf"
            );
        }
        other => panic!("expected Fetch, got {other:?}"),
    }
}

#[test]
fn test_file_download_url() {
    let resolution = Resolver::new().resolve(&doc("https://drive.google.com/file/d/", "ABC"));

    match resolution {
        Resolution::Fetch(action) => {
            assert!(action.url.contains("id=ABC"));
            assert_eq!(
                action.url,
                "https://drive.usercontent.google.com/download?id=ABC&export=download&authuser=0"
            );
        }
        other => panic!("expected Fetch, got {other:?}"),
    }
}

#[test]
fn test_unrecognized_domain_passes_through() {
    let resolution = Resolver::new().resolve(&doc("https://example.com/foo.pdf", "XYZ"));

    match resolution {
        Resolution::Fetch(action) => {
            assert_eq!(action.url, "https://example.com/foo.pdf");
        }
        other => panic!("expected Fetch, got {other:?}"),
    }
}

#[test]
fn test_empty_file_id_is_not_retrievable_for_any_domain() {
    let resolver = Resolver::new();

    for domain in [
        "https://docs.google.com/document/d/",
        "https://drive.google.com/file/d/",
        "https://example.com/foo.pdf",
        "",
    ] {
        let resolution = resolver.resolve(&doc(domain, ""));
        assert!(
            matches!(resolution, Resolution::NotRetrievable { .. }),
            "domain {domain:?} should not be retrievable without a file id"
        );
    }
}

#[test]
fn test_dispatch_notifies_success_exactly_once() {
    let sink = RecordingSink::default();
    let action = dispatch(
        &doc("https://drive.google.com/file/d/", "ABC"),
        &Resolver::new(),
        &sink,
    );

    assert!(action.is_some());
    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0],
        ("Download started for: House Rules".to_string(), Level::Success)
    );
}

#[test]
fn test_dispatch_notifies_error_exactly_once() {
    let sink = RecordingSink::default();
    let action = dispatch(&doc("https://drive.google.com/file/d/", ""), &Resolver::new(), &sink);

    assert!(action.is_none());
    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0],
        ("File not found: House Rules".to_string(), Level::Error)
    );
}

#[test]
fn test_dispatch_carries_filename_and_title() {
    let sink = RecordingSink::default();
    let action = dispatch(
        &doc("https://docs.google.com/document/d/", "ABC"),
        &Resolver::new(),
        &sink,
    )
    .unwrap();

    assert_eq!(action.filename, "house-rules.pdf");
    assert_eq!(action.title, "House Rules");
}

//! Catalog seeding.
//!
//! A [`CatalogLoader`] supplies the initial category list, called at
//! most once at startup. Failure is fatal to initialization; the host
//! decides the fallback (an empty catalog, an error banner). The core
//! never retries.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::catalog::Catalog;
use crate::domain::{CategoryRecord, DocumentRecord};

/// Seed loading failures.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read seed file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Supplies the initial catalog state.
#[async_trait]
pub trait CatalogLoader: Send + Sync {
    /// Human-readable loader name, for logs
    fn name(&self) -> &str;

    /// Produce the seed categories, in display order.
    async fn load(&self) -> Result<Vec<CategoryRecord>, LoadError>;
}

/// Load a catalog through a loader.
pub async fn load_catalog(loader: &dyn CatalogLoader) -> Result<Catalog, LoadError> {
    let categories = loader.load().await?;
    info!(
        loader = loader.name(),
        categories = categories.len(),
        "catalog seeded"
    );
    Ok(Catalog::from_categories(categories))
}

/// The built-in fixed seed table: the rental-portal document set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSeed;

#[async_trait]
impl CatalogLoader for BuiltinSeed {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn load(&self) -> Result<Vec<CategoryRecord>, LoadError> {
        Ok(builtin_categories())
    }
}

const DRIVE_FILE_DOMAIN: &str = "https://drive.google.com/file/d/";
const DOCS_DOCUMENT_DOMAIN: &str = "https://docs.google.com/document/d/";

/// The fixed seed table.
pub fn builtin_categories() -> Vec<CategoryRecord> {
    vec![
        CategoryRecord::new("left")
            .with_label("Leasing Forms")
            .with_document(
                DocumentRecord::new("application-to-rent-form", "Application to Rent Form")
                    .with_source_domain(DRIVE_FILE_DOMAIN)
                    .with_filename("application-to-rent-form.pdf")
                    .with_external_file_id("16fzAwUvRhWMHGUkoFBBl68jYQk9FfD3k"),
            )
            .with_document(
                DocumentRecord::new("month-to-month-lease-form", "Month-to-Month Lease Form")
                    .with_source_domain(DRIVE_FILE_DOMAIN)
                    .with_filename("month-to-month-lease-form.pdf")
                    .with_external_file_id("1_IE5yO0DkpEclZcLeUIPVcZxG2M5Rfsg"),
            )
            .with_document(
                DocumentRecord::new(
                    "guarantee-of-rental-agreement-form",
                    "Guarantee of Rental Agreement Form",
                )
                .with_source_domain(DRIVE_FILE_DOMAIN)
                .with_filename("guarantee-of-rental-agreement-form.pdf")
                .with_external_file_id("1Wn-VfHQP0MfmbNdPc_SEYpMUheKGDq-W"),
            ),
        CategoryRecord::new("right")
            .with_label("Resident Forms")
            .with_document(
                DocumentRecord::new(
                    "resident-service-request-form",
                    "Resident Service Request Form",
                )
                .with_source_domain(DRIVE_FILE_DOMAIN)
                .with_filename("resident-service-request-form.pdf")
                .with_external_file_id("1GCJKN7DgKfFmHbovYXBkf9ZEFe5z_ut5"),
            )
            .with_document(
                DocumentRecord::new(
                    "tenant-incident-complaint-form",
                    "Tenant Incident Complaint Form",
                )
                .with_source_domain(DRIVE_FILE_DOMAIN)
                .with_filename("tenant-incident-complaint-form.pdf")
                .with_external_file_id("1fLTwJIfgLAj8pl2kzgfYFKG-UQ_1b5vX"),
            )
            .with_document(
                DocumentRecord::new("house-rules", "House Rules")
                    .with_source_domain(DOCS_DOCUMENT_DOMAIN)
                    .with_filename("house-rules.pdf")
                    .with_external_file_id("1CzFI340BwXqx5QGI4h7huXs4D1PgFX46-og534dpio8"),
            ),
    ]
}

/// Loads the seed table from a JSON file: an array of category
/// records in display order.
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    path: PathBuf,
}

impl JsonFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogLoader for JsonFileLoader {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn load(&self) -> Result<Vec<CategoryRecord>, LoadError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| LoadError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

//! Command-line interface for docshelf.
//!
//! Provides commands for listing the catalog, searching it, and
//! resolving or downloading individual documents. The CLI is the host
//! around the core: it seeds the catalog once, wires up the projector
//! and notification sink, and turns resolved URLs into actual fetches.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::catalog::Catalog;
use crate::config;
use crate::domain::DocumentRecord;
use crate::loader::{load_catalog, BuiltinSeed, CatalogLoader, JsonFileLoader};
use crate::notify::ToastHub;
use crate::resolver::{dispatch, Resolver, RetrievalAction};
use crate::view::TextProjector;

/// docshelf - in-memory document catalog with download resolution
#[derive(Parser, Debug)]
#[command(name = "docshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the full catalog
    List,

    /// Search document titles and descriptions
    Search {
        /// Case-insensitive substring; empty matches everything
        query: String,
    },

    /// Show the total document count
    Count,

    /// Show a single category
    Category {
        /// Category key
        category_id: String,
    },

    /// Resolve a document to its download URL without fetching
    Resolve {
        /// Category key
        category_id: String,

        /// Document id within the category
        document_id: String,
    },

    /// Resolve a document and download it
    Download {
        /// Category key
        category_id: String,

        /// Document id within the category
        document_id: String,

        /// Output directory (defaults to the platform download folder)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Execute the parsed command.
    pub async fn execute(self) -> Result<()> {
        let cfg = config::config()?;

        let loader: Box<dyn CatalogLoader> = match &cfg.seed {
            Some(path) => Box::new(JsonFileLoader::new(path)),
            None => Box::new(BuiltinSeed),
        };
        let mut catalog = load_catalog(loader.as_ref())
            .await
            .context("Failed to seed catalog")?;

        let resolver = Resolver::with_hosts(&cfg.export_host, &cfg.download_host);
        let toasts = ToastHub::new(cfg.toast_dismiss);

        match self.command {
            Commands::List => {
                // Attaching renders the current state once
                catalog.attach_projector(Box::new(TextProjector::new()));
            }

            Commands::Search { query } => {
                let hits = catalog.search(&query);
                if hits.is_empty() {
                    println!("No documents match '{query}'");
                } else {
                    for hit in hits {
                        println!(
                            "{} / {} [{}]",
                            hit.category_label, hit.document.title, hit.document.id
                        );
                    }
                }
            }

            Commands::Count => {
                println!("{}", catalog.total_document_count());
            }

            Commands::Category { category_id } => match catalog.category(&category_id) {
                Some(category) => {
                    println!("{}", category.display_label());
                    for document in &category.documents {
                        println!("  - {} [{}]", document.title, document.id);
                    }
                }
                None => println!("No such category: {category_id}"),
            },

            Commands::Resolve {
                category_id,
                document_id,
            } => {
                let document = find_document(&catalog, &category_id, &document_id)?;
                let action = dispatch(document, &resolver, &toasts);
                print_toasts(&toasts);
                if let Some(action) = action {
                    println!("{}", action.url);
                }
            }

            Commands::Download {
                category_id,
                document_id,
                output,
            } => {
                let document = find_document(&catalog, &category_id, &document_id)?;
                let action = dispatch(document, &resolver, &toasts);
                print_toasts(&toasts);
                if let Some(action) = action {
                    let path = fetch(&action, output).await?;
                    println!("Saved {}", path.display());
                }
            }
        }

        Ok(())
    }
}

/// One-shot stand-in for a toast surface: print whatever is still
/// active when the command finishes.
fn print_toasts(toasts: &ToastHub) {
    for toast in toasts.active() {
        eprintln!("[{}] {}", toast.level, toast.message);
    }
}

fn find_document<'a>(
    catalog: &'a Catalog,
    category_id: &str,
    document_id: &str,
) -> Result<&'a DocumentRecord> {
    catalog
        .category(category_id)
        .with_context(|| format!("No such category: {category_id}"))?
        .document(document_id)
        .with_context(|| format!("No document '{document_id}' in category '{category_id}'"))
}

/// Fetch a resolved URL to disk. This is host glue, outside the core:
/// the resolver itself never touches the network.
async fn fetch(action: &RetrievalAction, output: Option<PathBuf>) -> Result<PathBuf> {
    let dir = output
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    info!(url = %action.url, "fetching document");

    let response = reqwest::get(&action.url)
        .await
        .with_context(|| format!("Failed to fetch {}", action.url))?
        .error_for_status()
        .with_context(|| format!("Server rejected {}", action.url))?;

    let bytes = response
        .bytes()
        .await
        .context("Failed to read response body")?;

    let path = dir.join(&action.filename);
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

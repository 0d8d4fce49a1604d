//! docshelf - in-memory document catalog with download resolution
//!
//! A small catalog of downloadable documents grouped into named
//! categories, with query/mutation operations, a derived user-facing
//! view kept consistent with mutations, and a resolver that turns a
//! document's source domain and external file id into a concrete
//! download URL.
//!
//! # Architecture
//!
//! The [`Catalog`] owns all live records and is mutated through its
//! own API only. After each successful mutation it hands a full value
//! snapshot to the attached [`ViewProjector`]; download resolution is
//! a pure function whose outcome is reported through a
//! [`NotificationSink`]. Seeding happens once at startup through a
//! [`CatalogLoader`].
//!
//! # Modules
//!
//! - `domain`: Data structures (DocumentRecord, CategoryRecord)
//! - `catalog`: The catalog store and its snapshots
//! - `resolver`: Download-URL resolution policy
//! - `view`: Projector trait and plain-text renderer
//! - `notify`: Notification sink trait, tracing sink, toast hub
//! - `loader`: Seed loaders (builtin table, JSON file)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Render the catalog
//! docshelf list
//!
//! # Search it
//! docshelf search lease
//!
//! # Resolve a document to its download URL
//! docshelf resolve right house-rules
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod loader;
pub mod notify;
pub mod resolver;
pub mod view;

// Re-export main types at crate root for convenience
pub use catalog::{Catalog, CatalogSnapshot, SearchHit};
pub use domain::{CategoryRecord, DocumentPatch, DocumentRecord};
pub use loader::{BuiltinSeed, CatalogLoader, JsonFileLoader, LoadError};
pub use notify::{Level, NotificationSink, Toast, ToastHub, TracingSink};
pub use resolver::{dispatch, Resolution, Resolver, RetrievalAction};
pub use view::{TextProjector, ViewProjector};

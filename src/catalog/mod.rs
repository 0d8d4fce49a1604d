//! The catalog: categories of documents, queries, and mutations.
//!
//! The [`Catalog`] is the sole owner of live records. Collaborators
//! only ever see [`CatalogSnapshot`] value copies, produced after
//! every successful mutation for the attached view projector.

pub mod snapshot;
pub mod store;

pub use snapshot::{CatalogSnapshot, SearchHit};
pub use store::Catalog;

//! Data structures for the document catalog.
//!
//! These are passive value types: they are created, cloned, and
//! serialized freely. Live instances are owned by
//! [`crate::catalog::Catalog`]; everything else sees copies.

pub mod category;
pub mod document;

pub use category::CategoryRecord;
pub use document::{DocumentPatch, DocumentRecord};

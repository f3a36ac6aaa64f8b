//! Repository trait definitions for the domain layer.
//!
//! The importer talks to exactly one external system, the content store, through
//! the [`ContentStore`] trait. Concrete clients live in
//! `crate::infrastructure::store`; mock implementations are generated via
//! `mockall` for unit tests.

pub mod content_store;

pub use content_store::ContentStore;

#[cfg(test)]
pub use content_store::MockContentStore;

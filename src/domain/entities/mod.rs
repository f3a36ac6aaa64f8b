//! Core domain entities of the importer.
//!
//! Entities are plain data structures; the pipeline logic lives in
//! [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`SourceRecord`] - A parsed content file
//! - [`ReferenceEntity`] - A category or author stored remotely
//! - [`PublishedEntry`] - An entry the content store accepted
//! - [`MigrationResult`] - Counters of one run
//!
//! Creation inputs follow the `New*` naming: [`NewReference`], [`NewEntry`].

pub mod entry;
pub mod migration_result;
pub mod reference;
pub mod source_record;

pub use entry::{NewEntry, PublishedEntry, resolve_published_at};
pub use migration_result::MigrationResult;
pub use reference::{
    AuthorProfile, CategoryMap, NewReference, ReferenceEntity, ReferenceKind, ResolvedReferences,
};
pub use source_record::{REQUIRED_FIELDS, SourceRecord};

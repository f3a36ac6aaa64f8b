//! Pipeline services of the application layer.
//!
//! - [`ReferenceResolver`] - Categories and author, resolved once per run
//! - [`EntryPublisher`] - One entry per source record
//! - [`MigrationService`] - Sequences the stages and cleans up source files

pub mod entry_publisher;
pub mod migration_service;
pub mod reference_resolver;

pub use entry_publisher::EntryPublisher;
pub use migration_service::{MigrationOptions, MigrationService, MigrationState};
pub use reference_resolver::ReferenceResolver;

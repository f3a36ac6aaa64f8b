//! Application layer: the import pipeline.
//!
//! Services consume the [`crate::domain::repositories::ContentStore`] trait and
//! are wired together by [`services::MigrationService`].
//!
//! # Available Services
//!
//! - [`services::reference_resolver::ReferenceResolver`] - Category and author resolution
//! - [`services::entry_publisher::EntryPublisher`] - Entry creation with precondition checks
//! - [`services::migration_service::MigrationService`] - Run orchestration and cleanup

pub mod services;

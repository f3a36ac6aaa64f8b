//! # Content Importer
//!
//! Publishes a folder of markdown files into a Sanity dataset.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Records, reference entities and the store contract
//! - **Application Layer** ([`application`]) - Resolver, publisher and run orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Markdown files and HTTP store clients
//!
//! ## Pipeline
//!
//! 1. Read every `.md` file of the content folder (front matter + body)
//! 2. Resolve categories and the author, creating the missing ones
//! 3. Create one post per file, strictly one after another
//! 4. Delete the file, or move it to the backup folder
//!
//! Per-file failures are logged and counted; only configuration and reference
//! resolution failures abort a run.
//!
//! ## Quick Start
//!
//! ```bash
//! export SANITY_PROJECT_ID="abc123"
//! export SANITY_TOKEN="sk..."
//!
//! # Preview without writing anything
//! cargo run -- --dry-run
//!
//! # Import and keep processed files
//! cargo run -- --backup
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod utils;

pub use error::{MigrationError, PublishError, StoreError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the binaries and
/// integration tests.
pub mod prelude {
    pub use crate::application::services::{
        EntryPublisher, MigrationOptions, MigrationService, MigrationState, ReferenceResolver,
    };
    pub use crate::domain::entities::{
        AuthorProfile, CategoryMap, MigrationResult, NewEntry, NewReference, PublishedEntry,
        ReferenceEntity, ReferenceKind, SourceRecord,
    };
    pub use crate::domain::repositories::ContentStore;
    pub use crate::error::{MigrationError, PublishError, StoreError};
    pub use crate::infrastructure::content::{MarkdownReader, SourceCleanup};
}

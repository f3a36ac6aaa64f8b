//! Domain layer containing the importer's entities and store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Records, reference entities, entries and run counters
//! - [`repositories`] - The [`repositories::ContentStore`] contract
//!
//! The domain layer has no dependency on HTTP or the file system. Pipeline
//! stages live in [`crate::application::services`].

pub mod entities;
pub mod repositories;

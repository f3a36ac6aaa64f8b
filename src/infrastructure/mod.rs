//! Infrastructure layer for external integrations.
//!
//! This layer implements the contracts of the domain layer against the outside
//! world.
//!
//! # Modules
//!
//! - [`content`] - Local markdown files: reading and post-publish cleanup
//! - [`store`] - HTTP clients for the content store

pub mod content;
pub mod store;

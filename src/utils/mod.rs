//! Utility functions shared by the importer and the admin tool.
//!
//! - [`slug`] - Slug derivation for categories and authors
//! - [`mask`] - Redaction of secrets before they reach the logs
//! - [`origin`] - CORS origin normalization

pub mod mask;
pub mod origin;
pub mod slug;

pub use mask::mask_secret;
pub use origin::{OriginError, normalize_origin};
pub use slug::slugify;

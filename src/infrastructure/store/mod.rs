//! Content store clients.
//!
//! - [`SanityContentStore`] - [`crate::domain::repositories::ContentStore`] over the Sanity data API
//! - [`DryRunStore`] - Decorator that forwards reads and swallows writes
//! - [`SanityManagementClient`] - Project management API (CORS origins)

mod documents;
mod dry_run;
mod http;
mod management;
mod sanity_store;

pub use dry_run::DryRunStore;
pub use management::{CorsOrigin, SanityManagementClient};
pub use sanity_store::{SanityContentStore, SanityEndpoint};

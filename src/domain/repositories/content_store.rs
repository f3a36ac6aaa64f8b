//! Repository trait for the remote content store.

use crate::domain::entities::{NewEntry, NewReference, PublishedEntry, ReferenceEntity, ReferenceKind};
use crate::error::StoreError;
use async_trait::async_trait;

/// Remote content store holding categories, authors and entries.
///
/// Every method is a single remote call. Implementations never retry; callers
/// decide whether a failure is fatal.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::SanityContentStore`] - Sanity HTTP API
/// - [`crate::infrastructure::store::DryRunStore`] - Read-through decorator that never writes
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Returns true if a write token is configured.
    ///
    /// Checked before any remote call is made.
    fn has_write_credential(&self) -> bool;

    /// Lists every entity of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the query fails or the response cannot be decoded.
    async fn list_entities(&self, kind: ReferenceKind) -> Result<Vec<ReferenceEntity>, StoreError>;

    /// Creates a category or author and returns it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the mutation is rejected or the response carries no id.
    async fn create_entity(&self, new_reference: NewReference) -> Result<ReferenceEntity, StoreError>;

    /// Creates a content entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the mutation is rejected or the response carries no id.
    async fn create_entry(&self, new_entry: NewEntry) -> Result<PublishedEntry, StoreError>;
}

//! Read-through store decorator that never writes.

use crate::domain::entities::{NewEntry, NewReference, PublishedEntry, ReferenceEntity, ReferenceKind};
use crate::domain::repositories::ContentStore;
use crate::error::StoreError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Wraps a store so that list queries reach it and create calls do not.
///
/// Creates are logged and answered with synthetic ids of the form
/// `dry-run.<type>.<n>`, which lets a full run exercise resolution and
/// publishing without touching the remote dataset.
pub struct DryRunStore<S> {
    inner: S,
    next_id: AtomicUsize,
}

impl<S: ContentStore> DryRunStore<S> {
    pub fn new(inner: S) -> Self {
        info!("Dry run: create calls will not be sent to the content store");
        Self {
            inner,
            next_id: AtomicUsize::new(1),
        }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn synthetic_id(&self, type_name: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("dry-run.{}.{}", type_name, n)
    }
}

#[async_trait]
impl<S: ContentStore> ContentStore for DryRunStore<S> {
    fn has_write_credential(&self) -> bool {
        self.inner.has_write_credential()
    }

    async fn list_entities(&self, kind: ReferenceKind) -> Result<Vec<ReferenceEntity>, StoreError> {
        self.inner.list_entities(kind).await
    }

    async fn create_entity(&self, new_reference: NewReference) -> Result<ReferenceEntity, StoreError> {
        let id = self.synthetic_id(new_reference.kind.type_name());
        info!("[dry run] would create {} \"{}\" ({})", new_reference.kind, new_reference.name, id);

        Ok(ReferenceEntity::new(
            id,
            Some(new_reference.name),
            Some(new_reference.slug),
        ))
    }

    async fn create_entry(&self, new_entry: NewEntry) -> Result<PublishedEntry, StoreError> {
        let id = self.synthetic_id("post");
        info!(
            "[dry run] would create post \"{}\" ({})",
            new_entry.title.as_deref().unwrap_or_default(),
            id
        );

        Ok(PublishedEntry::new(id, new_entry.slug, new_entry.title))
    }
}

//! Reference resolution service.

use crate::domain::entities::{
    AuthorProfile, CategoryMap, NewReference, ReferenceKind, ResolvedReferences, SourceRecord,
};
use crate::domain::repositories::ContentStore;
use crate::error::MigrationError;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{error, info};

/// Resolves the categories and author a batch of records points to.
///
/// Performs one list query per entity type plus one create call per missing
/// entity, all sequentially:
///
/// - categories are matched by exact, case-sensitive name; existing remote
///   categories are always preferred over creating a new one
/// - a category that cannot be created stays unmapped and its records fail later
/// - the first listed author is reused; otherwise exactly one is created
pub struct ReferenceResolver<S: ContentStore> {
    store: Arc<S>,
    author: AuthorProfile,
}

impl<S: ContentStore> ReferenceResolver<S> {
    /// Creates a resolver that creates `author` when the store has none.
    pub fn new(store: Arc<S>, author: AuthorProfile) -> Self {
        Self { store, author }
    }

    /// Resolves categories, then the author.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::CategoryListing`] if existing categories cannot
    /// be listed and [`MigrationError::AuthorUnavailable`] if no author can be
    /// listed or created.
    pub async fn resolve(&self, records: &[SourceRecord]) -> Result<ResolvedReferences, MigrationError> {
        let categories = self.resolve_categories(records).await?;
        let author_id = self.resolve_author().await?;

        Ok(ResolvedReferences {
            categories,
            author_id,
        })
    }

    /// Builds the category name → id map for a batch.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::CategoryListing`] if the list query fails.
    /// Create failures are logged and leave the name unmapped.
    pub async fn resolve_categories(
        &self,
        records: &[SourceRecord],
    ) -> Result<CategoryMap, MigrationError> {
        info!("Getting category references...");

        let names: BTreeSet<&str> = records.iter().filter_map(SourceRecord::category_name).collect();
        info!(
            "Found {} unique categories: {}",
            names.len(),
            names.iter().copied().collect::<Vec<_>>().join(", ")
        );

        let existing = self
            .store
            .list_entities(ReferenceKind::Category)
            .await
            .map_err(MigrationError::CategoryListing)?;
        info!("Found {} existing categories in the store.", existing.len());

        let mut map = CategoryMap::new();
        for category in existing {
            if let Some(name) = category.name {
                map.insert_if_absent(name, category.id);
            }
        }

        for name in names {
            if map.contains(name) {
                continue;
            }

            info!("Creating new category: {}", name);
            match self.store.create_entity(NewReference::category(name)).await {
                Ok(created) => {
                    info!("Created category: {} ({})", name, created.id);
                    map.insert_if_absent(name, created.id);
                }
                Err(e) => error!("Failed to create category {}: {}", name, e),
            }
        }

        Ok(map)
    }

    /// Returns the id of the author every entry is attributed to.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::AuthorUnavailable`] if the list query or the
    /// create call fails.
    pub async fn resolve_author(&self) -> Result<String, MigrationError> {
        info!("Getting author reference...");

        let existing = self
            .store
            .list_entities(ReferenceKind::Author)
            .await
            .map_err(MigrationError::AuthorUnavailable)?;

        if let Some(author) = existing.into_iter().next() {
            info!(
                "Using existing author: {} ({})",
                author.name.as_deref().unwrap_or("<unnamed>"),
                author.id
            );
            return Ok(author.id);
        }

        info!("Creating new author: {}", self.author.name);
        let created = self
            .store
            .create_entity(NewReference::author(&self.author))
            .await
            .map_err(|e| {
                error!("Failed to create author: {}", e);
                MigrationError::AuthorUnavailable(e)
            })?;

        info!("Created author: {} ({})", self.author.name, created.id);
        Ok(created.id)
    }
}

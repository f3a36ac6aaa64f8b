//! Entry publishing service.

use crate::domain::entities::{
    CategoryMap, NewEntry, PublishedEntry, SourceRecord, resolve_published_at,
};
use crate::domain::repositories::ContentStore;
use crate::error::PublishError;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};

/// Creates one entry per source record.
///
/// A record is rejected without any remote call when its category is missing
/// or unresolved, or when its `publishedAt` cannot be read. Otherwise exactly
/// one create call is made. Failures are logged here and returned to the
/// caller, which counts them and moves on.
pub struct EntryPublisher<S: ContentStore> {
    store: Arc<S>,
}

impl<S: ContentStore> EntryPublisher<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Publishes a record using the resolved author and categories.
    ///
    /// # Errors
    ///
    /// - [`PublishError::InvalidCategory`] if the category is empty or not in `categories`
    /// - [`PublishError::InvalidPublishedAt`] if `publishedAt` is not a recognized timestamp
    /// - [`PublishError::Store`] if the store rejects the entry
    pub async fn publish(
        &self,
        record: &SourceRecord,
        author_id: &str,
        categories: &CategoryMap,
    ) -> Result<PublishedEntry, PublishError> {
        let title = record.display_title();
        info!("Creating post: {}", title);

        let new_entry = build_entry(record, author_id, categories).inspect_err(|e| error!("{}", e))?;

        match self.store.create_entry(new_entry).await {
            Ok(created) => {
                info!("Post created successfully: {}", created.id);
                Ok(created)
            }
            Err(source) => {
                let err = PublishError::Store {
                    title: title.to_string(),
                    source,
                };
                error!("{}", err);
                Err(err)
            }
        }
    }
}

/// Builds the entry payload for a record, checking its preconditions.
///
/// # Errors
///
/// Returns [`PublishError::InvalidCategory`] or [`PublishError::InvalidPublishedAt`].
pub fn build_entry(
    record: &SourceRecord,
    author_id: &str,
    categories: &CategoryMap,
) -> Result<NewEntry, PublishError> {
    let title = record.display_title();

    let category_id = record
        .category_name()
        .and_then(|name| categories.get(name))
        .ok_or_else(|| PublishError::InvalidCategory {
            title: title.to_string(),
            category: record.category.clone(),
        })?;

    let published_at = resolve_published_at(record.published_at.as_deref(), Utc::now())
        .ok_or_else(|| PublishError::InvalidPublishedAt {
            title: title.to_string(),
            value: record.published_at.clone().unwrap_or_default(),
        })?;

    Ok(NewEntry {
        title: record.title.clone(),
        subtitle: record.subtitle.clone(),
        slug: record.slug.clone(),
        description: record.description.clone(),
        author_id: author_id.to_string(),
        category_id: category_id.to_string(),
        published_at,
        read_time: record.read_time.clone(),
        icon: record.icon.clone(),
        icon_color: record.icon_color.clone(),
        body: record.body.clone(),
    })
}

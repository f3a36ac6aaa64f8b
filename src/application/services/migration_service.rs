//! Migration orchestration service.

use super::{EntryPublisher, ReferenceResolver};
use crate::domain::entities::{AuthorProfile, MigrationResult, SourceRecord};
use crate::domain::repositories::ContentStore;
use crate::error::MigrationError;
use crate::infrastructure::content::{CleanupOutcome, MarkdownReader, SourceCleanup};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Where a migration run currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationState {
    Idle,
    Reading,
    Resolving,
    /// Publishing the record at this index.
    Publishing(usize),
    Done(MigrationResult),
    Failed(String),
}

impl fmt::Display for MigrationState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Reading => f.write_str("reading"),
            Self::Resolving => f.write_str("resolving"),
            Self::Publishing(i) => write!(f, "publishing({})", i),
            Self::Done(_) => f.write_str("done"),
            Self::Failed(_) => f.write_str("failed"),
        }
    }
}

/// Settings for one migration run.
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    pub content_dir: PathBuf,
    pub cleanup: SourceCleanup,
    pub author: AuthorProfile,
}

/// Runs the import pipeline: read, resolve, then publish and clean up each record.
///
/// Records are processed strictly one after another. Per-record failures are
/// counted and never stop the batch; only a missing write credential, an
/// unreadable content folder or a failed resolution aborts the run.
///
/// Publishing and cleanup are not transactional: when the entry is created but
/// the source file cannot be removed, the record still counts as succeeded and
/// a later run will create a second entry from the same file.
pub struct MigrationService<S: ContentStore> {
    store: Arc<S>,
    content_dir: PathBuf,
    reader: MarkdownReader,
    resolver: ReferenceResolver<S>,
    publisher: EntryPublisher<S>,
    cleanup: SourceCleanup,
    state: MigrationState,
}

impl<S: ContentStore> MigrationService<S> {
    pub fn new(store: Arc<S>, options: MigrationOptions) -> Self {
        Self {
            reader: MarkdownReader::new(options.content_dir.clone()),
            content_dir: options.content_dir,
            resolver: ReferenceResolver::new(store.clone(), options.author),
            publisher: EntryPublisher::new(store.clone()),
            cleanup: options.cleanup,
            store,
            state: MigrationState::Idle,
        }
    }

    pub fn state(&self) -> &MigrationState {
        &self.state
    }

    /// Runs the migration to completion.
    ///
    /// Returns the counters of a completed run, including runs with zero
    /// records or with per-record failures.
    ///
    /// # Errors
    ///
    /// - [`MigrationError::MissingCredential`] if no write token is configured;
    ///   nothing is read and no remote call is made
    /// - [`MigrationError::ContentUnreadable`] if the content folder exists but
    ///   cannot be listed
    /// - [`MigrationError::CategoryListing`] / [`MigrationError::AuthorUnavailable`]
    ///   if references cannot be resolved
    pub async fn run(&mut self) -> Result<MigrationResult, MigrationError> {
        info!("Starting markdown import...");

        match self.execute().await {
            Ok(result) => {
                info!("Migration completed: {}", result);
                self.transition(MigrationState::Done(result));
                Ok(result)
            }
            Err(e) => {
                error!("Migration failed: {}", e);
                self.transition(MigrationState::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    async fn execute(&mut self) -> Result<MigrationResult, MigrationError> {
        if !self.store.has_write_credential() {
            return Err(MigrationError::MissingCredential);
        }

        self.transition(MigrationState::Reading);
        let batch = self
            .reader
            .read_all()
            .await
            .map_err(|source| MigrationError::ContentUnreadable {
                dir: self.content_dir.clone(),
                source,
            })?;
        let records = batch.records;
        let mut result = MigrationResult {
            skipped: batch.skipped,
            ..MigrationResult::default()
        };
        if records.is_empty() {
            info!("No markdown files found. Nothing to do.");
            return Ok(result);
        }

        self.transition(MigrationState::Resolving);
        let references = self.resolver.resolve(&records).await?;

        info!("Processing {} markdown files...", records.len());
        for (index, record) in records.iter().enumerate() {
            self.transition(MigrationState::Publishing(index));

            let published = self
                .publisher
                .publish(record, &references.author_id, &references.categories)
                .await;

            match published {
                Ok(_) => {
                    result.record_success();
                    if !self.clean_up(record).await {
                        result.record_cleanup_failure();
                    }
                }
                Err(_) => {
                    warn!(
                        "Post \"{}\" was not created. File not deleted.",
                        record.display_title()
                    );
                    result.record_failure();
                }
            }
        }

        Ok(result)
    }

    /// Applies the configured cleanup; returns false if the source file stayed behind.
    async fn clean_up(&self, record: &SourceRecord) -> bool {
        let title = record.display_title();

        match self.cleanup.apply(record).await {
            Ok(CleanupOutcome::Deleted) => {
                info!("Successfully created post \"{}\" and deleted file", title);
                true
            }
            Ok(CleanupOutcome::Archived(target)) => {
                info!(
                    "Successfully created post \"{}\" and moved file to {}",
                    title,
                    target.display()
                );
                true
            }
            Ok(CleanupOutcome::Kept) => {
                info!("Successfully created post \"{}\" (file kept)", title);
                true
            }
            Err(e) => {
                error!(
                    "Post \"{}\" was created but {} could not be cleaned up: {}",
                    title,
                    record.source_path().display(),
                    e
                );
                false
            }
        }
    }

    fn transition(&mut self, next: MigrationState) {
        debug!("Migration state: {} -> {}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PublishedEntry, ReferenceEntity, ReferenceKind};
    use crate::domain::repositories::MockContentStore;
    use crate::error::StoreError;
    use std::fs;
    use tempfile::TempDir;

    fn options(dir: &TempDir, cleanup: SourceCleanup) -> MigrationOptions {
        MigrationOptions {
            content_dir: dir.path().to_path_buf(),
            cleanup,
            author: AuthorProfile::default(),
        }
    }

    fn write_post(dir: &TempDir, name: &str, category: &str) {
        let text = format!(
            "---\ntitle: {name}\nslug: {name}\ndescription: About {name}\ncategory: {category}\n---\nBody\n"
        );
        fs::write(dir.path().join(format!("{}.md", name)), text).unwrap();
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_any_call() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "hello", "Guides");

        let mut store = MockContentStore::new();
        store.expect_has_write_credential().return_const(false);
        store.expect_list_entities().times(0);
        store.expect_create_entity().times(0);
        store.expect_create_entry().times(0);

        let mut service = MigrationService::new(Arc::new(store), options(&dir, SourceCleanup::Delete));
        let result = service.run().await;

        assert!(matches!(result, Err(MigrationError::MissingCredential)));
        assert!(matches!(service.state(), MigrationState::Failed(_)));
        assert!(dir.path().join("hello.md").exists());
    }

    #[tokio::test]
    async fn test_empty_directory_is_done_without_remote_calls() {
        let dir = TempDir::new().unwrap();

        let mut store = MockContentStore::new();
        store.expect_has_write_credential().return_const(true);
        store.expect_list_entities().times(0);

        let mut service = MigrationService::new(Arc::new(store), options(&dir, SourceCleanup::Delete));
        let result = service.run().await.unwrap();

        assert_eq!(result, MigrationResult::default());
        assert_eq!(service.state(), &MigrationState::Done(MigrationResult::default()));
    }

    #[tokio::test]
    async fn test_unreadable_content_folder_fails_run() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("content");
        fs::write(&file, "not a folder").unwrap();

        let mut store = MockContentStore::new();
        store.expect_has_write_credential().return_const(true);
        store.expect_list_entities().times(0);

        let options = MigrationOptions {
            content_dir: file.clone(),
            cleanup: SourceCleanup::Delete,
            author: AuthorProfile::default(),
        };
        let mut service = MigrationService::new(Arc::new(store), options);
        let result = service.run().await;

        assert!(matches!(
            result,
            Err(MigrationError::ContentUnreadable { ref dir, .. }) if *dir == file
        ));
        assert!(matches!(service.state(), MigrationState::Failed(_)));
    }

    #[tokio::test]
    async fn test_author_failure_aborts_before_publishing() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "hello", "Guides");

        let mut store = MockContentStore::new();
        store.expect_has_write_credential().return_const(true);
        store
            .expect_list_entities()
            .withf(|kind| *kind == ReferenceKind::Category)
            .returning(|_| Ok(vec![ReferenceEntity::new("cat-1", Some("Guides".to_string()), None)]));
        store
            .expect_list_entities()
            .withf(|kind| *kind == ReferenceKind::Author)
            .returning(|_| Ok(vec![]));
        store
            .expect_create_entity()
            .times(1)
            .returning(|_| Err(StoreError::api(403, "forbidden")));
        store.expect_create_entry().times(0);

        let mut service = MigrationService::new(Arc::new(store), options(&dir, SourceCleanup::Delete));
        let result = service.run().await;

        assert!(matches!(result, Err(MigrationError::AuthorUnavailable(_))));
        assert!(dir.path().join("hello.md").exists());
    }

    #[tokio::test]
    async fn test_failed_record_does_not_stop_batch() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "a-first", "Guides");
        write_post(&dir, "b-second", "Guides");

        let mut store = MockContentStore::new();
        store.expect_has_write_credential().return_const(true);
        store
            .expect_list_entities()
            .withf(|kind| *kind == ReferenceKind::Category)
            .returning(|_| Ok(vec![ReferenceEntity::new("cat-1", Some("Guides".to_string()), None)]));
        store
            .expect_list_entities()
            .withf(|kind| *kind == ReferenceKind::Author)
            .returning(|_| Ok(vec![ReferenceEntity::new("author-1", Some("A".to_string()), None)]));
        store
            .expect_create_entry()
            .withf(|entry| entry.slug.as_deref() == Some("a-first"))
            .times(1)
            .returning(|_| Err(StoreError::api(500, "boom")));
        store
            .expect_create_entry()
            .withf(|entry| entry.slug.as_deref() == Some("b-second"))
            .times(1)
            .returning(|entry| Ok(PublishedEntry::new("post-2", entry.slug, entry.title)));

        let mut service = MigrationService::new(Arc::new(store), options(&dir, SourceCleanup::Delete));
        let result = service.run().await.unwrap();

        assert_eq!(result.succeeded, 1);
        assert_eq!(result.failed, 1);
        assert!(dir.path().join("a-first.md").exists());
        assert!(!dir.path().join("b-second.md").exists());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(MigrationState::Publishing(3).to_string(), "publishing(3)");
        assert_eq!(MigrationState::Failed("x".to_string()).to_string(), "failed");
    }
}

//! Post-publish handling of source files.

use crate::domain::entities::SourceRecord;
use std::io;
use std::path::PathBuf;
use tokio::fs;

/// What happens to a source file once its entry has been created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCleanup {
    /// Remove the file.
    Delete,
    /// Move the file into `dir`, keeping its file name. `dir` is created on demand.
    Backup { dir: PathBuf },
    /// Leave the file where it is. Used by dry runs.
    Keep,
}

/// Result of a successful cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    Deleted,
    Archived(PathBuf),
    Kept,
}

impl SourceCleanup {
    /// Applies the cleanup to the record's source file.
    ///
    /// Single attempt; a failure leaves the file in place.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from creating the backup directory, moving or
    /// deleting the file.
    pub async fn apply(&self, record: &SourceRecord) -> io::Result<CleanupOutcome> {
        match self {
            Self::Delete => {
                fs::remove_file(record.source_path()).await?;
                Ok(CleanupOutcome::Deleted)
            }
            Self::Backup { dir } => {
                let file_name = record.source_path().file_name().ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("{} has no file name", record.source_path().display()),
                    )
                })?;
                fs::create_dir_all(dir).await?;
                let target = dir.join(file_name);
                fs::rename(record.source_path(), &target).await?;
                Ok(CleanupOutcome::Archived(target))
            }
            Self::Keep => Ok(CleanupOutcome::Kept),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn record_at(dir: &TempDir, name: &str) -> SourceRecord {
        let path = dir.path().join(name);
        std_fs::write(&path, "---\ntitle: x\n---\n").unwrap();
        SourceRecord::new(path)
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let dir = TempDir::new().unwrap();
        let record = record_at(&dir, "post.md");

        let outcome = SourceCleanup::Delete.apply(&record).await.unwrap();

        assert_eq!(outcome, CleanupOutcome::Deleted);
        assert!(!record.source_path().exists());
    }

    #[tokio::test]
    async fn test_backup_creates_dir_and_keeps_name() {
        let dir = TempDir::new().unwrap();
        let record = record_at(&dir, "post.md");
        let backup_dir = dir.path().join("processed").join("2026");

        let outcome = SourceCleanup::Backup {
            dir: backup_dir.clone(),
        }
        .apply(&record)
        .await
        .unwrap();

        assert_eq!(outcome, CleanupOutcome::Archived(backup_dir.join("post.md")));
        assert!(!record.source_path().exists());
        assert!(backup_dir.join("post.md").exists());
    }

    #[tokio::test]
    async fn test_keep_leaves_file() {
        let dir = TempDir::new().unwrap();
        let record = record_at(&dir, "post.md");

        let outcome = SourceCleanup::Keep.apply(&record).await.unwrap();

        assert_eq!(outcome, CleanupOutcome::Kept);
        assert!(record.source_path().exists());
    }

    #[tokio::test]
    async fn test_delete_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let record = SourceRecord::new(dir.path().join("gone.md"));

        assert!(SourceCleanup::Delete.apply(&record).await.is_err());
    }
}

//! Reads a directory of markdown files into source records.

use super::front_matter::{FrontMatter, parse_front_matter, split_document};
use crate::domain::entities::SourceRecord;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info, warn};

/// Extension of files the reader picks up.
const CONTENT_EXTENSION: &str = "md";

/// Records read from a content directory.
#[derive(Debug, Default)]
pub struct ContentBatch {
    pub records: Vec<SourceRecord>,
    /// Files that matched but could not be read.
    pub skipped: usize,
}

/// Reader for a flat directory of markdown files.
///
/// Problems with individual files never abort a read:
///
/// - missing required metadata → warning, record still produced
/// - malformed front matter → warning, record produced with empty metadata
/// - unreadable file → warning, file skipped and counted
///
/// A missing directory is logged and yields an empty batch. Any other failure
/// to list the directory is returned to the caller.
pub struct MarkdownReader {
    dir: PathBuf,
}

impl MarkdownReader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Reads every `.md` file directly inside the directory, ordered by file name.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the directory exists but cannot be listed, for
    /// example when it is a regular file or lacks read permission.
    pub async fn read_all(&self) -> io::Result<ContentBatch> {
        info!("Scanning {} for markdown files...", self.dir.display());

        let paths = match self.content_files().await {
            Ok(paths) => paths,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                error!("Folder {} does not exist!", self.dir.display());
                return Ok(ContentBatch::default());
            }
            Err(e) => return Err(e),
        };
        info!("Found {} markdown files.", paths.len());

        let mut batch = ContentBatch {
            records: Vec::with_capacity(paths.len()),
            skipped: 0,
        };
        for path in paths {
            match fs::read_to_string(&path).await {
                Ok(text) => batch.records.push(parse_source(&path, &text)),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    batch.skipped += 1;
                }
            }
        }

        Ok(batch)
    }

    async fn content_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut paths = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(CONTENT_EXTENSION) {
                continue;
            }
            match entry.file_type().await {
                Ok(file_type) if file_type.is_file() => paths.push(path),
                Ok(_) => debug!("Ignoring non-file entry {}", path.display()),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        paths.sort();
        Ok(paths)
    }
}

/// Parses the text of one content file into a record.
///
/// Logs a warning listing the required keys the file lacks.
pub fn parse_source(path: &Path, text: &str) -> SourceRecord {
    let split = split_document(text);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let front_matter = match split.front_matter.map(parse_front_matter) {
        Some(Ok(front_matter)) => front_matter,
        Some(Err(e)) => {
            warn!("File {} has malformed front matter: {}", file_name, e);
            FrontMatter::default()
        }
        None => FrontMatter::default(),
    };

    let record = SourceRecord {
        title: front_matter.title,
        slug: front_matter.slug,
        description: front_matter.description,
        category: front_matter.category,
        subtitle: front_matter.subtitle,
        published_at: front_matter.published_at,
        read_time: front_matter.read_time,
        icon: front_matter.icon,
        icon_color: front_matter.icon_color,
        body: split.body.to_string(),
        source_path: path.to_path_buf(),
    };

    let missing = record.missing_required_fields();
    if !missing.is_empty() {
        warn!(
            "File {} is missing required fields: {}",
            file_name,
            missing.join(", ")
        );
    }

    record
}

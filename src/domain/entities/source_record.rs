//! Source record entity representing one parsed content file.

use std::path::{Path, PathBuf};
use validator::Validate;

/// Front-matter keys every content file is expected to carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["title", "slug", "description", "category"];

/// One markdown file, split into metadata and body.
///
/// Required metadata is modeled as `Option` so that an incomplete file can still
/// travel through the pipeline: missing fields are reported when the file is
/// read, and only a missing category stops the record from being published.
/// Empty strings are stored as `None`.
#[derive(Debug, Clone, Default, Validate)]
pub struct SourceRecord {
    #[validate(required)]
    pub title: Option<String>,
    #[validate(required)]
    pub slug: Option<String>,
    #[validate(required)]
    pub description: Option<String>,
    #[validate(required)]
    pub category: Option<String>,
    pub subtitle: Option<String>,
    /// Raw `publishedAt` value; resolved to a timestamp at publish time.
    pub published_at: Option<String>,
    pub read_time: Option<String>,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    pub body: String,
    pub source_path: PathBuf,
}

impl SourceRecord {
    /// Creates an empty record for the given file.
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            ..Self::default()
        }
    }

    /// Returns the required front-matter keys that are absent, in declaration order.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };
        let field_errors = errors.field_errors();

        REQUIRED_FIELDS
            .into_iter()
            .filter(|field| field_errors.contains_key(*field))
            .collect()
    }

    /// Returns the category name if it is present and non-empty.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Title used in log lines; falls back to the file name.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or_else(|| self.file_name().unwrap_or("<untitled>"))
    }

    /// File name of the originating file, used when archiving it.
    pub fn file_name(&self) -> Option<&str> {
        self.source_path.file_name().and_then(|n| n.to_str())
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> SourceRecord {
        SourceRecord {
            title: Some("Getting Started".to_string()),
            slug: Some("getting-started".to_string()),
            description: Some("First steps".to_string()),
            category: Some("Guides".to_string()),
            body: "# Hello".to_string(),
            ..SourceRecord::new("content/getting-started.md")
        }
    }

    #[test]
    fn test_complete_record_has_no_missing_fields() {
        let record = complete_record();
        assert!(record.missing_required_fields().is_empty());
        assert_eq!(record.category_name(), Some("Guides"));
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let record = SourceRecord {
            title: Some("Only a title".to_string()),
            ..SourceRecord::new("content/partial.md")
        };

        assert_eq!(
            record.missing_required_fields(),
            vec!["slug", "description", "category"]
        );
    }

    #[test]
    fn test_empty_category_is_not_a_name() {
        let record = SourceRecord {
            category: Some(String::new()),
            ..complete_record()
        };
        assert_eq!(record.category_name(), None);
    }

    #[test]
    fn test_display_title_falls_back_to_file_name() {
        let record = SourceRecord::new("content/untitled-post.md");
        assert_eq!(record.display_title(), "untitled-post.md");
        assert_eq!(record.file_name(), Some("untitled-post.md"));
    }
}

#![allow(dead_code)]

use async_trait::async_trait;
use content_importer::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// In-memory content store that records every call it receives.
#[derive(Default)]
pub struct InMemoryStore {
    credential: bool,
    fail_category_list: bool,
    fail_author_create: bool,
    failing_categories: Vec<String>,
    failing_entries: Vec<String>,
    state: Mutex<StoreState>,
}

#[derive(Default)]
struct StoreState {
    categories: Vec<ReferenceEntity>,
    authors: Vec<ReferenceEntity>,
    created_references: Vec<NewReference>,
    created_entries: Vec<NewEntry>,
    list_calls: usize,
    next_id: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            credential: true,
            ..Self::default()
        }
    }

    pub fn without_credential() -> Self {
        Self::default()
    }

    pub fn with_category(self, id: &str, name: &str) -> Self {
        self.state.lock().unwrap().categories.push(ReferenceEntity::new(
            id,
            Some(name.to_string()),
            Some(name.to_lowercase()),
        ));
        self
    }

    pub fn with_author(self, id: &str, name: &str) -> Self {
        self.state.lock().unwrap().authors.push(ReferenceEntity::new(
            id,
            Some(name.to_string()),
            None,
        ));
        self
    }

    pub fn failing_category_list(mut self) -> Self {
        self.fail_category_list = true;
        self
    }

    pub fn failing_author_create(mut self) -> Self {
        self.fail_author_create = true;
        self
    }

    /// Rejects creation of the category with this name.
    pub fn failing_category(mut self, name: &str) -> Self {
        self.failing_categories.push(name.to_string());
        self
    }

    /// Rejects creation of entries with this title.
    pub fn failing_entry(mut self, title: &str) -> Self {
        self.failing_entries.push(title.to_string());
        self
    }

    pub fn created_references(&self, kind: ReferenceKind) -> Vec<NewReference> {
        self.state
            .lock()
            .unwrap()
            .created_references
            .iter()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect()
    }

    pub fn created_entries(&self) -> Vec<NewEntry> {
        self.state.lock().unwrap().created_entries.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }

    /// Number of remote calls of any kind.
    pub fn total_calls(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.list_calls + state.created_references.len() + state.created_entries.len()
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    fn has_write_credential(&self) -> bool {
        self.credential
    }

    async fn list_entities(&self, kind: ReferenceKind) -> Result<Vec<ReferenceEntity>, StoreError> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;

        match kind {
            ReferenceKind::Category if self.fail_category_list => {
                Err(StoreError::api(503, "service unavailable"))
            }
            ReferenceKind::Category => Ok(state.categories.clone()),
            ReferenceKind::Author => Ok(state.authors.clone()),
        }
    }

    async fn create_entity(&self, new_reference: NewReference) -> Result<ReferenceEntity, StoreError> {
        let mut state = self.state.lock().unwrap();
        state.created_references.push(new_reference.clone());

        let rejected = match new_reference.kind {
            ReferenceKind::Category => self.failing_categories.contains(&new_reference.name),
            ReferenceKind::Author => self.fail_author_create,
        };
        if rejected {
            return Err(StoreError::api(400, "rejected"));
        }

        state.next_id += 1;
        let entity = ReferenceEntity::new(
            format!("{}-{}", new_reference.kind, state.next_id),
            Some(new_reference.name.clone()),
            Some(new_reference.slug.clone()),
        );
        match new_reference.kind {
            ReferenceKind::Category => state.categories.push(entity.clone()),
            ReferenceKind::Author => state.authors.push(entity.clone()),
        }
        Ok(entity)
    }

    async fn create_entry(&self, new_entry: NewEntry) -> Result<PublishedEntry, StoreError> {
        let mut state = self.state.lock().unwrap();
        state.created_entries.push(new_entry.clone());

        if let Some(ref title) = new_entry.title
            && self.failing_entries.contains(title)
        {
            return Err(StoreError::api(500, "internal error"));
        }

        state.next_id += 1;
        Ok(PublishedEntry::new(
            format!("post-{}", state.next_id),
            new_entry.slug,
            new_entry.title,
        ))
    }
}

/// Writes a markdown file with the given front matter lines and body.
pub fn write_post(dir: &Path, file_name: &str, front_matter: &[&str], body: &str) -> PathBuf {
    let path = dir.join(file_name);
    let content = format!("---\n{}\n---\n{}", front_matter.join("\n"), body);
    fs::write(&path, content).unwrap();
    path
}

/// Writes a post with every required field set.
pub fn write_complete_post(dir: &Path, file_name: &str, title: &str, category: &str) -> PathBuf {
    let slug = title.to_lowercase().replace(' ', "-");
    write_post(
        dir,
        file_name,
        &[
            &format!("title: \"{}\"", title),
            &format!("slug: \"{}\"", slug),
            "description: \"Imported post\"",
            &format!("category: \"{}\"", category),
        ],
        &format!("# {}\n\nBody text.\n", title),
    )
}

pub fn options(content_dir: &Path, cleanup: SourceCleanup) -> MigrationOptions {
    MigrationOptions {
        content_dir: content_dir.to_path_buf(),
        cleanup,
        author: AuthorProfile::default(),
    }
}

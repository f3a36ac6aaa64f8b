//! Reference entities: categories and authors that entries point to by id.

use crate::utils::slugify;
use std::collections::HashMap;
use std::fmt;

/// Description attached to categories the importer creates.
fn category_description(name: &str) -> String {
    format!("Content related to {}", name)
}

/// The two kinds of reference entity the importer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Category,
    Author,
}

impl ReferenceKind {
    /// Document type name used by the content store.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Author => "author",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A category or author as stored remotely.
///
/// `name` may be absent when the remote document was created without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntity {
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl ReferenceEntity {
    pub fn new(id: impl Into<String>, name: Option<String>, slug: Option<String>) -> Self {
        Self {
            id: id.into(),
            name,
            slug,
        }
    }
}

/// Input data for creating a reference entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReference {
    pub kind: ReferenceKind,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub bio: Option<String>,
}

impl NewReference {
    /// Builds a category with a derived slug and the standard description.
    pub fn category(name: &str) -> Self {
        Self {
            kind: ReferenceKind::Category,
            name: name.to_string(),
            slug: slugify(name),
            description: Some(category_description(name)),
            bio: None,
        }
    }

    /// Builds an author from a profile.
    pub fn author(profile: &AuthorProfile) -> Self {
        Self {
            kind: ReferenceKind::Author,
            name: profile.name.clone(),
            slug: slugify(&profile.name),
            description: None,
            bio: Some(profile.bio.clone()),
        }
    }
}

/// The single author every imported entry is attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorProfile {
    pub name: String,
    pub bio: String,
}

impl Default for AuthorProfile {
    fn default() -> Self {
        Self {
            name: "Sreejan".to_string(),
            bio: "Developer, creator, and tech enthusiast.".to_string(),
        }
    }
}

/// Category name → remote id mapping built by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    ids: HashMap<String, String>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a mapping unless the name is already mapped.
    ///
    /// Returns `true` if the mapping was added.
    pub fn insert_if_absent(&mut self, name: impl Into<String>, id: impl Into<String>) -> bool {
        let name = name.into();
        if self.ids.contains_key(&name) {
            return false;
        }
        self.ids.insert(name, id.into());
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.ids.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Everything the publisher needs from the resolution phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReferences {
    pub categories: CategoryMap,
    pub author_id: String,
}

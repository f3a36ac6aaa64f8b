//! Wire format of the Sanity data API.
//!
//! Documents are sent inside `{"mutations": [{"create": <document>}]}` and
//! queried with GROQ. Reference entities are projected to a common
//! `{_id, name, slug}` shape so categories (`title`) and authors (`name`)
//! decode through one row type.

use crate::domain::entities::{NewEntry, NewReference, ReferenceEntity, ReferenceKind};
use crate::error::StoreError;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

/// Field holding the display name of a reference entity.
pub fn name_field(kind: ReferenceKind) -> &'static str {
    match kind {
        ReferenceKind::Category => "title",
        ReferenceKind::Author => "name",
    }
}

/// GROQ query listing every entity of a kind.
pub fn list_query(kind: ReferenceKind) -> String {
    format!(
        r#"*[_type == "{}"] {{ _id, "name": {}, "slug": slug.current }}"#,
        kind.type_name(),
        name_field(kind)
    )
}

#[derive(Debug, Serialize)]
struct Slug<'a> {
    #[serde(rename = "_type")]
    kind: &'static str,
    current: &'a str,
}

impl<'a> Slug<'a> {
    fn new(current: &'a str) -> Self {
        Self {
            kind: "slug",
            current,
        }
    }
}

#[derive(Debug, Serialize)]
struct Reference<'a> {
    #[serde(rename = "_type")]
    kind: &'static str,
    #[serde(rename = "_ref")]
    target: &'a str,
}

impl<'a> Reference<'a> {
    fn new(target: &'a str) -> Self {
        Self {
            kind: "reference",
            target,
        }
    }
}

#[derive(Debug, Serialize)]
struct CategoryDocument<'a> {
    title: &'a str,
    slug: Slug<'a>,
    description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct AuthorDocument<'a> {
    name: &'a str,
    slug: Slug<'a>,
    bio: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PostDocument<'a> {
    title: Option<&'a str>,
    subtitle: Option<&'a str>,
    slug: Option<Slug<'a>>,
    description: Option<&'a str>,
    author: Reference<'a>,
    category: Reference<'a>,
    published_at: String,
    read_time: Option<&'a str>,
    icon: Option<&'a str>,
    icon_color: Option<&'a str>,
    body: &'a str,
}

/// A document in one of the three types the importer writes.
#[derive(Debug, Serialize)]
#[serde(tag = "_type", rename_all = "lowercase")]
enum Document<'a> {
    Category(CategoryDocument<'a>),
    Author(AuthorDocument<'a>),
    Post(PostDocument<'a>),
}

#[derive(Debug, Serialize)]
enum Mutation<'a> {
    #[serde(rename = "create")]
    Create(Document<'a>),
}

#[derive(Debug, Serialize)]
struct MutationRequest<'a> {
    mutations: Vec<Mutation<'a>>,
}

/// Builds the mutation body creating a category or author.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if the document cannot be serialized.
pub fn reference_mutation(new_reference: &NewReference) -> Result<serde_json::Value, StoreError> {
    let slug = Slug::new(&new_reference.slug);
    let document = match new_reference.kind {
        ReferenceKind::Category => Document::Category(CategoryDocument {
            title: &new_reference.name,
            slug,
            description: new_reference.description.as_deref(),
        }),
        ReferenceKind::Author => Document::Author(AuthorDocument {
            name: &new_reference.name,
            slug,
            bio: new_reference.bio.as_deref(),
        }),
    };
    to_mutation(document)
}

/// Builds the mutation body creating a post.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if the document cannot be serialized.
pub fn entry_mutation(new_entry: &NewEntry) -> Result<serde_json::Value, StoreError> {
    let document = Document::Post(PostDocument {
        title: new_entry.title.as_deref(),
        subtitle: new_entry.subtitle.as_deref(),
        slug: new_entry.slug.as_deref().map(Slug::new),
        description: new_entry.description.as_deref(),
        author: Reference::new(&new_entry.author_id),
        category: Reference::new(&new_entry.category_id),
        published_at: new_entry
            .published_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        read_time: new_entry.read_time.as_deref(),
        icon: new_entry.icon.as_deref(),
        icon_color: new_entry.icon_color.as_deref(),
        body: &new_entry.body,
    });
    to_mutation(document)
}

fn to_mutation(document: Document<'_>) -> Result<serde_json::Value, StoreError> {
    let request = MutationRequest {
        mutations: vec![Mutation::Create(document)],
    };
    serde_json::to_value(request)
        .map_err(|e| StoreError::decode(format!("invalid mutation body: {}", e)))
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: Vec<EntityRow>,
}

#[derive(Debug, Deserialize)]
struct EntityRow {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    slug: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MutationResponse {
    #[serde(default)]
    results: Vec<MutationResult>,
}

#[derive(Debug, Deserialize)]
struct MutationResult {
    id: String,
}

/// Decodes a GROQ list response into reference entities.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if the body is not a query result of rows with `_id`.
pub fn decode_entities(body: &str) -> Result<Vec<ReferenceEntity>, StoreError> {
    let response: QueryResponse = serde_json::from_str(body)
        .map_err(|e| StoreError::decode(format!("invalid query response: {}", e)))?;

    Ok(response
        .result
        .into_iter()
        .map(|row| ReferenceEntity::new(row.id, row.name, row.slug))
        .collect())
}

/// Extracts the id of the first created document from a mutation response.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if the body is malformed or lists no results.
pub fn decode_created_id(body: &str) -> Result<String, StoreError> {
    let response: MutationResponse = serde_json::from_str(body)
        .map_err(|e| StoreError::decode(format!("invalid mutation response: {}", e)))?;

    response
        .results
        .into_iter()
        .next()
        .map(|r| r.id)
        .ok_or_else(|| StoreError::decode("mutation response contains no created id"))
}

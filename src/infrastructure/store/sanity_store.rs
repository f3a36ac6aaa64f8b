//! Sanity HTTP API implementation of the content store.

use super::documents::{
    decode_created_id, decode_entities, entry_mutation, list_query, reference_mutation,
};
use super::http::read_body;
use crate::domain::entities::{NewEntry, NewReference, PublishedEntry, ReferenceEntity, ReferenceKind};
use crate::domain::repositories::ContentStore;
use crate::error::StoreError;
use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Location of one dataset in the Sanity data API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityEndpoint {
    query_url: Url,
    mutate_url: Url,
}

impl SanityEndpoint {
    /// Builds the data API URLs for a dataset.
    ///
    /// # Arguments
    ///
    /// - `api_host` - Override for the API host (e.g. a local proxy). Defaults to
    ///   `https://<project_id>.api.sanity.io`
    /// - `api_version` - Date-based API version, with or without a leading `v`
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] if the resulting URL is invalid.
    pub fn new(
        api_host: Option<&str>,
        project_id: &str,
        api_version: &str,
        dataset: &str,
    ) -> Result<Self, url::ParseError> {
        let host = match api_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.sanity.io", project_id),
        };
        let version = api_version.trim_start_matches('v');

        let query_url = Url::parse(&format!("{}/v{}/data/query/{}", host, version, dataset))?;
        let mut mutate_url =
            Url::parse(&format!("{}/v{}/data/mutate/{}", host, version, dataset))?;
        mutate_url
            .query_pairs_mut()
            .append_pair("returnIds", "true");

        Ok(Self {
            query_url,
            mutate_url,
        })
    }

    /// URL running a GROQ query.
    pub fn query_url(&self, query: &str) -> Url {
        let mut url = self.query_url.clone();
        url.query_pairs_mut().append_pair("query", query);
        url
    }

    /// URL accepting mutations, returning created ids.
    pub fn mutate_url(&self) -> &Url {
        &self.mutate_url
    }
}

/// Content store backed by the Sanity data API.
///
/// Each trait method issues exactly one request. No timeout or retry policy is
/// configured here.
pub struct SanityContentStore {
    http: reqwest::Client,
    endpoint: SanityEndpoint,
    token: Option<String>,
}

impl SanityContentStore {
    /// Creates a client for an endpoint.
    ///
    /// `token` is the write token; without one, only public datasets can be
    /// listed and every create call is rejected by the API.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the HTTP client cannot be built.
    pub fn new(endpoint: SanityEndpoint, token: Option<String>) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            endpoint,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn mutate(&self, body: serde_json::Value) -> Result<String, StoreError> {
        let request = self.http.post(self.endpoint.mutate_url().clone()).json(&body);
        let response = self.authorize(request).send().await?;
        let body = read_body(response).await?;
        decode_created_id(&body)
    }
}

#[async_trait]
impl ContentStore for SanityContentStore {
    fn has_write_credential(&self) -> bool {
        self.token.is_some()
    }

    async fn list_entities(&self, kind: ReferenceKind) -> Result<Vec<ReferenceEntity>, StoreError> {
        let url = self.endpoint.query_url(&list_query(kind));
        debug!(kind = %kind, url = %url, "Querying content store");

        let response = self.authorize(self.http.get(url)).send().await?;
        let body = read_body(response).await?;
        let entities = decode_entities(&body)?;

        debug!(kind = %kind, count = entities.len(), "Listed entities");
        Ok(entities)
    }

    async fn create_entity(&self, new_reference: NewReference) -> Result<ReferenceEntity, StoreError> {
        let id = self.mutate(reference_mutation(&new_reference)?).await?;
        info!(kind = %new_reference.kind, id = %id, name = %new_reference.name, "Created entity");

        Ok(ReferenceEntity::new(
            id,
            Some(new_reference.name),
            Some(new_reference.slug),
        ))
    }

    async fn create_entry(&self, new_entry: NewEntry) -> Result<PublishedEntry, StoreError> {
        let id = self.mutate(entry_mutation(&new_entry)?).await?;
        debug!(id = %id, "Created post");

        Ok(PublishedEntry::new(id, new_entry.slug, new_entry.title))
    }
}

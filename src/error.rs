//! Error types shared across the importer layers.
//!
//! Errors are split by blast radius:
//!
//! - [`StoreError`] - a single remote call failed
//! - [`PublishError`] - one record could not be published; the batch continues
//! - [`MigrationError`] - the run cannot continue and exits non-zero

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single call against the content store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure (DNS, TLS, connection reset, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

/// Why a single record was not published.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("invalid category for post \"{title}\": {category:?}")]
    InvalidCategory {
        title: String,
        category: Option<String>,
    },

    #[error("invalid publishedAt for post \"{title}\": {value}")]
    InvalidPublishedAt { title: String, value: String },

    #[error("failed to create post \"{title}\": {source}")]
    Store {
        title: String,
        #[source]
        source: StoreError,
    },
}

impl PublishError {
    /// Returns true when the record was rejected before any remote call.
    pub fn is_precondition(&self) -> bool {
        !matches!(self, Self::Store { .. })
    }
}

/// Errors that abort the whole migration run.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("no write token configured; set SANITY_TOKEN to run the import")]
    MissingCredential,

    #[error("failed to read content folder {}: {source}", dir.display())]
    ContentUnreadable {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to list existing categories: {0}")]
    CategoryListing(#[source] StoreError),

    #[error("failed to resolve author: {0}")]
    AuthorUnavailable(#[source] StoreError),
}

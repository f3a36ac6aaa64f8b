//! Sanity project management API: allowed CORS origins.

use super::http::read_body;
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

const MANAGEMENT_HOST: &str = "https://api.sanity.io";
const MANAGEMENT_API_VERSION: &str = "v2021-06-07";

/// An origin allowed to call the project's API from a browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsOrigin {
    pub origin: String,
    #[serde(default)]
    pub allow_credentials: bool,
}

/// Client for the project-level management endpoints.
///
/// Unlike the data API it always needs a token.
pub struct SanityManagementClient {
    http: reqwest::Client,
    cors_url: Url,
    token: String,
}

impl SanityManagementClient {
    /// Creates a client for a project.
    ///
    /// `api_host` overrides `https://api.sanity.io`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] if the host does not form a valid URL and
    /// [`StoreError::Http`] if the HTTP client cannot be built.
    pub fn new(api_host: Option<&str>, project_id: &str, token: String) -> Result<Self, StoreError> {
        let cors_url = cors_url(api_host, project_id)
            .map_err(|e| StoreError::decode(format!("invalid management URL: {}", e)))?;
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            cors_url,
            token,
        })
    }

    /// Lists the allowed CORS origins.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails or the response cannot be decoded.
    pub async fn list_cors_origins(&self) -> Result<Vec<CorsOrigin>, StoreError> {
        let response = self
            .http
            .get(self.cors_url.clone())
            .bearer_auth(&self.token)
            .send()
            .await?;
        let body = read_body(response).await?;

        serde_json::from_str(&body)
            .map_err(|e| StoreError::decode(format!("invalid CORS origin list: {}", e)))
    }

    /// Adds an allowed CORS origin.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Api`] if the origin is rejected (for example when it
    /// already exists).
    pub async fn add_cors_origin(&self, origin: &CorsOrigin) -> Result<CorsOrigin, StoreError> {
        let response = self
            .http
            .post(self.cors_url.clone())
            .bearer_auth(&self.token)
            .json(origin)
            .send()
            .await?;
        let body = read_body(response).await?;

        let created: CorsOrigin = serde_json::from_str(&body)
            .map_err(|e| StoreError::decode(format!("invalid CORS origin: {}", e)))?;
        info!("Added CORS origin {}", created.origin);
        Ok(created)
    }
}

fn cors_url(api_host: Option<&str>, project_id: &str) -> Result<Url, url::ParseError> {
    let host = api_host.unwrap_or(MANAGEMENT_HOST).trim_end_matches('/');
    Url::parse(&format!(
        "{}/{}/projects/{}/cors",
        host, MANAGEMENT_API_VERSION, project_id
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cors_url() {
        assert_eq!(
            cors_url(None, "090e1vat").unwrap().as_str(),
            "https://api.sanity.io/v2021-06-07/projects/090e1vat/cors"
        );
        assert_eq!(
            cors_url(Some("http://localhost:9000/"), "p").unwrap().as_str(),
            "http://localhost:9000/v2021-06-07/projects/p/cors"
        );
    }

    #[test]
    fn test_cors_origin_wire_format() {
        let origin = CorsOrigin {
            origin: "https://sree.shop".to_string(),
            allow_credentials: true,
        };
        assert_eq!(
            serde_json::to_value(&origin).unwrap(),
            json!({ "origin": "https://sree.shop", "allowCredentials": true })
        );

        let listed: Vec<CorsOrigin> = serde_json::from_str(
            r#"[{"id": 1, "origin": "http://localhost:8080", "allowCredentials": true, "projectId": "p"}]"#,
        )
        .unwrap();
        assert_eq!(listed[0].origin, "http://localhost:8080");
        assert!(listed[0].allow_credentials);
    }
}

//! REST client implementation for the Stark Infra API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with path normalization.

use std::collections::BTreeMap;

use crate::auth::{settings, User};
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::StarkConfig;
use crate::error::ConfigError;

/// REST API client for the Stark Infra API.
///
/// Provides convenient methods (`get`, `post`, `patch`, `delete`) for making
/// authenticated REST requests.
///
/// # Thread Safety
///
/// `RestClient` is `Clone + Send + Sync`, making it safe to share across async
/// tasks. Lazy [`Query`](crate::rest::Query) iterators hold their own clone.
///
/// # Example
///
/// ```rust,ignore
/// use stark_infra::auth::Project;
/// use stark_infra::{Environment, ProjectId, RestClient, StarkConfig};
///
/// let project = Project::new(Environment::Sandbox, ProjectId::new("5656565656565656")?);
/// let client = RestClient::new(&StarkConfig::default(), project)?;
///
/// // GET request
/// let response = client.get("issuing-holder/5155165527080960", None).await?;
///
/// // PATCH request with body
/// let body = serde_json::json!({"status": "blocked"});
/// let response = client.patch("issuing-holder/5155165527080960", body, None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client authenticated as `user`.
    ///
    /// # Arguments
    ///
    /// * `config` - SDK configuration (host override, language, timeout)
    /// * `user` - The project or organization credential
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be
    /// created.
    pub fn new(config: &StarkConfig, user: impl Into<User>) -> Result<Self, ConfigError> {
        let user = user.into();
        tracing::debug!("Creating Stark Infra REST client for {}", user.access_id());

        Ok(Self {
            http_client: HttpClient::new(config, user)?,
        })
    }

    /// Creates a new REST client using the process-wide default user.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingUser`] if no default user was set via
    /// [`settings::set_user`], or [`ConfigError::HttpClientBuild`] if the HTTP
    /// client cannot be created.
    pub fn from_settings(config: &StarkConfig) -> Result<Self, ConfigError> {
        let user = settings::user().ok_or(ConfigError::MissingUser)?;
        tracing::debug!("Using default Stark Infra user {}", user.access_id());
        Self::new(config, user)
    }

    /// Returns the credential this client authenticates as.
    #[must_use]
    pub const fn user(&self) -> &User {
        self.http_client.user()
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "issuing-holder/123")
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PATCH request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Patch, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// Strips leading `/` characters and rejects paths that end up empty.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

//! HTTP client for Stark Infra API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Stark Infra API. Each call performs exactly one HTTP
//! exchange; nothing is retried.

use std::collections::HashMap;

use chrono::Utc;

use crate::auth::User;
use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::StarkConfig;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Stark Infra API.
///
/// The client handles:
/// - Base URL resolution from the credential's environment or the configured host
/// - Default headers including User-Agent and Accept-Language
/// - Per-request authentication headers (`Access-Id`, `Access-Time`, `Access-Signature`)
/// - JSON body decoding
///
/// # Thread Safety
///
/// `HttpClient` is `Clone + Send + Sync`; clones share the connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use stark_infra::{HttpClient, HttpRequest, HttpMethod, StarkConfig};
///
/// let client = HttpClient::new(&StarkConfig::default(), user)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "issuing-holder")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL with trailing slash (e.g., `https://sandbox.api.starkinfra.com/v2/`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// The credential identifying every request.
    user: User,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client authenticated as `user`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the underlying reqwest
    /// client cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &StarkConfig, user: User) -> Result<Self, ConfigError> {
        let base_url = config.base_url(user.environment());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("{user_agent_prefix}Rust-{rust_version}-SDK-{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            "Accept-Language".to_string(),
            config.language().as_str().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            default_headers,
            user,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the credential this client authenticates as.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Builds the authentication headers for a request body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Sign`] if the configured signer fails.
    pub fn auth_headers(&self, body: &str) -> Result<HashMap<String, String>, HttpError> {
        let access_id = self.user.access_id();
        let access_time = Utc::now().timestamp().to_string();

        let mut headers = HashMap::new();
        if let Some(signer) = self.user.signer() {
            let message = format!("{access_id}:{access_time}:{body}");
            headers.insert("Access-Signature".to_string(), signer.sign(&message)?);
        }
        headers.insert("Access-Id".to_string(), access_id);
        headers.insert("Access-Time".to_string(), access_time);
        Ok(headers)
    }

    /// Sends an HTTP request to the Stark Infra API.
    ///
    /// Non-2xx responses are returned as `Ok` so the caller can map the
    /// server's error payload; only validation, signing and network failures
    /// are reported as errors.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The signer fails (`Sign`)
    /// - A network error occurs (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_url, request.path.trim_start_matches('/'));
        let body_text = request.body_text();

        let mut headers = self.default_headers.clone();
        headers.extend(self.auth_headers(&body_text)?);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if request.body.is_some() {
            req_builder = req_builder.body(body_text);
        }

        tracing::debug!("Stark Infra request: {} {}", request.http_method, request.path);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        tracing::debug!(
            "Stark Infra response: {} {} -> {}",
            request.http_method,
            request.path,
            code
        );

        if !(200..=299).contains(&code) {
            tracing::warn!(
                "Stark Infra request {} {} failed with status {}",
                request.http_method,
                request.path,
                code
            );
        }

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

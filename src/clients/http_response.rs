//! HTTP response types for the Stark Infra SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing API response
//! data.

use std::collections::HashMap;

/// An HTTP response from the Stark Infra API.
///
/// Contains the response status code, headers (lower-cased names) and the
/// decoded JSON body. Responses with an empty body decode to `{}`.
///
/// # Example
///
/// ```rust
/// use stark_infra::HttpResponse;
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
///
/// let response = HttpResponse::new(200, headers, json!({"cursor": null}));
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("req-1"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the header `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}

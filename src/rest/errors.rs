//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for entity decoding and resource
//! operations, extending the base [`RestError`](crate::clients::RestError)
//! with resource-specific semantics like `NotFound`, `MissingField` and
//! server-reported `Api` errors.
//!
//! # Error Handling
//!
//! The SDK maps HTTP status codes to semantic error variants:
//!
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **Other 4xx/5xx**: [`ResourceError::Api`] - Server error codes and messages
//!
//! Decoding failures are reported as [`ResourceError::MissingField`],
//! [`ResourceError::InvalidField`], [`ResourceError::InvalidFormat`] and
//! [`ResourceError::UnknownParameters`].
//!
//! # Example
//!
//! ```rust,ignore
//! use stark_infra::rest::ResourceError;
//! use stark_infra::IssuingHolder;
//!
//! match IssuingHolder::get(&client, "123", None).await {
//!     Ok(holder) => println!("Found: {}", holder.name),
//!     Err(ResourceError::NotFound { resource, id, .. }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(ResourceError::Api { errors, .. }) => {
//!         for error in errors {
//!             println!("{}: {}", error.code, error.message);
//!         }
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::clients::{HttpError, RestError};

/// A single error reported by the Stark Infra API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., `invalidTaxId`).
    pub code: String,
    /// Human-readable message in the configured language.
    pub message: String,
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use stark_infra::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "IssuingHolder",
///     id: "123".to_string(),
///     errors: Vec::new(),
///     request_id: None,
/// };
/// assert_eq!(error.to_string(), "IssuingHolder with id 123 not found");
///
/// let error = ResourceError::MissingField {
///     resource: "IssuingHolder",
///     field: "taxId".to_string(),
/// };
/// assert!(error.to_string().contains("taxId"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A required field was absent from a record or parameter map.
    #[error("{resource} is missing required field '{field}'")]
    MissingField {
        /// The entity name (e.g., "IssuingHolder").
        resource: &'static str,
        /// The missing key as it appears in API JSON.
        field: String,
    },

    /// A value could not be interpreted as the expected format.
    #[error("Invalid value '{value}', expected {expected}")]
    InvalidFormat {
        /// The offending value.
        value: String,
        /// Description of the accepted format.
        expected: &'static str,
    },

    /// A record or parameter map held keys the entity does not declare.
    #[error("Unknown parameters for {resource}: {}", keys.join(", "))]
    UnknownParameters {
        /// The entity name.
        resource: &'static str,
        /// The leftover keys, sorted.
        keys: Vec<String>,
    },

    /// A field was present with a value of the wrong type.
    #[error("{resource} field '{field}' is invalid: {message}")]
    InvalidField {
        /// The entity name.
        resource: &'static str,
        /// The key as it appears in API JSON.
        field: String,
        /// The decoder's description of the mismatch.
        message: String,
    },

    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The entity name.
        resource: &'static str,
        /// The ID that was requested.
        id: String,
        /// The errors reported in the response body.
        errors: Vec<ApiErrorDetail>,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// The API rejected the request with a non-2xx status.
    #[error("Stark Infra API error ({status}): {}", format_details(errors))]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The errors reported in the response body.
        errors: Vec<ApiErrorDetail>,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(RestError),
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Http(http) => Self::Http(http),
            other => Self::Rest(other),
        }
    }
}

impl ResourceError {
    /// Creates a `ResourceError` from a non-2xx HTTP response.
    ///
    /// Maps HTTP status codes to semantic error variants:
    /// - 404 -> `NotFound`
    /// - Other -> `Api` (parsing `{"errors": [{"code", "message"}]}` from body)
    ///
    /// # Arguments
    ///
    /// * `code` - The HTTP status code
    /// * `body` - The response body as JSON
    /// * `resource` - The entity name (e.g., "IssuingHolder")
    /// * `id` - The resource ID (if applicable)
    /// * `request_id` - The X-Request-Id header value
    ///
    /// # Example
    ///
    /// ```rust
    /// use stark_infra::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http_response(
    ///     400,
    ///     &json!({"errors": [{"code": "invalidTaxId", "message": "Invalid tax ID"}]}),
    ///     "IssuingHolder",
    ///     None,
    ///     Some("req-123"),
    /// );
    /// assert!(matches!(error, ResourceError::Api { status: 400, .. }));
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &serde_json::Value,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        match (code, id) {
            (404, Some(id)) => Self::NotFound {
                resource,
                id: id.to_string(),
                errors: parse_api_errors(body),
                request_id: request_id.map(ToString::to_string),
            },
            _ => Self::Api {
                status: code,
                errors: parse_api_errors(body),
                request_id: request_id.map(ToString::to_string),
            },
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api { request_id, .. } | Self::NotFound { request_id, .. } => {
                request_id.as_deref()
            }
            _ => None,
        }
    }

    /// Returns the server error codes of an [`ResourceError::Api`] or
    /// [`ResourceError::NotFound`] error.
    #[must_use]
    pub fn error_codes(&self) -> Vec<&str> {
        match self {
            Self::Api { errors, .. } | Self::NotFound { errors, .. } => {
                errors.iter().map(|e| e.code.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Parses the `errors` array of an API error body.
///
/// Bodies that do not follow the `[{"code", "message"}]` shape are kept as a
/// single `unknownError` detail carrying the raw body.
fn parse_api_errors(body: &serde_json::Value) -> Vec<ApiErrorDetail> {
    let parsed = body
        .get("errors")
        .cloned()
        .and_then(|errors| serde_json::from_value::<Vec<ApiErrorDetail>>(errors).ok());

    match parsed {
        Some(errors) if !errors.is_empty() => errors,
        _ => vec![ApiErrorDetail {
            code: "unknownError".to_string(),
            message: body.to_string(),
        }],
    }
}

fn format_details(errors: &[ApiErrorDetail]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

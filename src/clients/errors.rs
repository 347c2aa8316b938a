//! HTTP-specific error types for the Stark Infra SDK.
//!
//! This module contains error types for HTTP operations, covering request
//! validation failures, request signing failures and network errors.
//!
//! # Error Handling
//!
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Non-2xx responses are not errors at this layer. They are returned as
//! [`HttpResponse`](crate::clients::HttpResponse) values and mapped to
//! semantic errors by the resource layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use stark_infra::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Status {}: {}", response.code, response.body),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Sign(e)) => println!("Signing failed: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::auth::SignError;

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use stark_infra::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not accept a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// Use pattern matching to handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The configured signer could not sign the request.
    #[error(transparent)]
    Sign(#[from] SignError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "patch".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot use patch without specifying data."
        );
    }

    #[test]
    fn test_invalid_request_error_unexpected_body() {
        let error = InvalidHttpRequestError::UnexpectedBody {
            method: "get".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot send data with get.");
    }

    #[test]
    fn test_sign_error_is_transparent() {
        let error: HttpError = SignError {
            reason: "bad key".to_string(),
        }
        .into();
        assert_eq!(error.to_string(), "Failed to sign request: bad key");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid_error: &dyn std::error::Error =
            &InvalidHttpRequestError::MissingBody {
                method: "post".to_string(),
            };
        let _ = invalid_error;

        let http_error: &dyn std::error::Error =
            &HttpError::InvalidRequest(InvalidHttpRequestError::UnexpectedBody {
                method: "get".to_string(),
            });
        let _ = http_error;
    }
}

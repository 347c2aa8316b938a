//! REST-specific error types for the Stark Infra SDK.
//!
//! This module contains error types for REST transport operations: invalid
//! paths and wrapped HTTP errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use stark_infra::clients::rest::{RestClient, RestError};
//!
//! match client.get("issuing-holder", None).await {
//!     Ok(response) => println!("Holders: {}", response.body),
//!     Err(RestError::InvalidPath { path }) => {
//!         println!("Invalid path: {}", path);
//!     }
//!     Err(RestError::Http(e)) => {
//!         println!("HTTP error: {}", e);
//!     }
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use stark_infra::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid.
    ///
    /// This error is returned when a path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

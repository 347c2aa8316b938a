//! HTTP client types for Stark Infra API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the Stark Infra API.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A decoded response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`rest::RestClient`]: Higher-level REST client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use stark_infra::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&StarkConfig::default(), user)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "credit-note/log")
//!     .query_param("limit", "10")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! Requests are sent exactly once. Non-2xx responses come back as
//! [`HttpResponse`] values; the resource layer maps them to errors.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{RestClient, RestError};

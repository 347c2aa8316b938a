//! REST transport client for the Stark Infra API.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) with one helper per HTTP verb
//! the API uses.
//!
//! # Overview
//!
//! - [`RestClient`]: The REST client with `get()`, `post()`, `patch()`, `delete()` methods
//! - [`RestError`]: Error type for REST transport operations
//!
//! # Example
//!
//! ```rust,ignore
//! use stark_infra::auth::Project;
//! use stark_infra::{Environment, ProjectId, RestClient, StarkConfig};
//!
//! let project = Project::new(Environment::Sandbox, ProjectId::new("5656565656565656")?);
//! let client = RestClient::new(&StarkConfig::default(), project)?;
//!
//! let response = client.get("issuing-holder", None).await?;
//! println!("Holders: {}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! Leading slashes are stripped (`/issuing-holder` -> `issuing-holder`) and
//! empty paths are rejected with [`RestError::InvalidPath`].

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;

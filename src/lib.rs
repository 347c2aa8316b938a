//! # Stark Infra Rust SDK
//!
//! A Rust SDK for the Stark Infra API, providing type-safe configuration,
//! credential handling, and typed access to credit notes, credit note logs,
//! issuing holders and their spending rules.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StarkConfig`] and [`StarkConfigBuilder`]
//! - Validated newtypes for project, organization and workspace ids
//! - Project and organization credentials via [`auth::User`], with a pluggable
//!   [`auth::RequestSigner`] for the `Access-Signature` header
//! - An optional process-wide default credential via [`auth::settings`]
//! - Async HTTP transport with one request per call and no hidden retries
//! - Typed entities decoded and validated field by field
//! - Single-page listing via [`rest::Page`] and lazy cursor-following listing via [`rest::Query`]
//!
//! ## Quick Start
//!
//! ```rust
//! use stark_infra::{Environment, Language, ProjectId, StarkConfig};
//! use stark_infra::auth::Project;
//! use std::time::Duration;
//!
//! // Create configuration using the builder pattern
//! let config = StarkConfig::builder()
//!     .language(Language::PtBr)
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! // Create a credential
//! let project = Project::new(Environment::Sandbox, ProjectId::new("5656565656565656").unwrap());
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use stark_infra::{IssuingHolder, RestClient, StarkConfig};
//! use stark_infra::credit_note::{CreditNoteLogType, Log, LogListParams};
//!
//! let client = RestClient::new(&StarkConfig::default(), project)?;
//!
//! // Create a holder
//! let holders = IssuingHolder::create(
//!     &client,
//!     &[IssuingHolder {
//!         name: "Tony Stark".to_string(),
//!         tax_id: "012.345.678-90".to_string(),
//!         external_id: "my-entity/123".to_string(),
//!         ..Default::default()
//!     }],
//!     &[],
//! )
//! .await?;
//!
//! // Walk every "created" log since January
//! let mut logs = Log::query(
//!     &client,
//!     LogListParams {
//!         after: Some("2022-01-01".into()),
//!         types: Some(vec![CreditNoteLogType::Created]),
//!         ..Default::default()
//!     },
//! )?;
//! while let Some(log) = logs.next().await {
//!     let log = log?;
//!     println!("{} {:?}", log.id, log.note.status);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **Explicit credentials**: Clients are bound to a [`auth::User`]; the
//!   process-wide default is opt-in
//! - **Fail-fast validation**: All newtypes validate on construction, and
//!   entities reject missing and unknown fields
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Immutable entities**: Entities are value objects, never mutated by the SDK

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::User;
pub use config::{
    Environment, HostUrl, Language, OrganizationId, ProjectId, StarkConfig, StarkConfigBuilder,
    WorkspaceId,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, RestClient, RestError,
};

// Re-export resource types
pub use rest::resources::credit_note;
pub use rest::resources::{
    CreditNote, CreditNoteListParams, CreditNoteSigner, CreditNoteStatus, IssuingHolder,
    IssuingHolderListParams, IssuingHolderStatus, IssuingHolderUpdateParams, IssuingRule,
    IssuingRuleInterval,
};
pub use rest::{DateInput, Page, Query, ResourceError};

/// Alias for [`credit_note::Log`].
pub type CreditNoteLog = credit_note::Log;

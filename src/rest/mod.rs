//! REST resource infrastructure for the Stark Infra API.
//!
//! This module provides the layer between typed entities and the transport:
//!
//! - **[`Resource`] trait**: An entity's name and its maker (decode function)
//! - **[`ResourceDescriptor<T>`]**: Name + maker, consumed by the generic operations
//! - **[`checks`]**: Parameter extraction, date normalization, unknown-key rejection
//! - **[`api`]**: Endpoint and JSON key derivation, API JSON serialization
//! - **[`operations`]**: `get_id`, `get_page`, `get_list`, `post`, `patch_id`, `delete_id`
//! - **[`Page<T>`]** and **[`Query<T>`]**: One page, and a lazy cursor-following listing
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use stark_infra::{IssuingHolder, IssuingHolderListParams, RestClient, StarkConfig};
//! use stark_infra::auth::Project;
//!
//! let client = RestClient::new(&StarkConfig::default(), project)?;
//!
//! // Fetch one page
//! let page = IssuingHolder::page(&client, IssuingHolderListParams::default(), None).await?;
//! for holder in page.iter() {
//!     println!("- {} ({:?})", holder.name, holder.status);
//! }
//!
//! // Walk every holder lazily
//! let mut holders = IssuingHolder::query(&client, IssuingHolderListParams::default())?;
//! while let Some(holder) = holders.next().await {
//!     println!("{}", holder?.name);
//! }
//! ```

pub mod api;
pub mod checks;
mod errors;
pub mod operations;
mod page;
mod query;
mod resource;

pub mod resources;

// Public exports
pub use checks::DateInput;
pub use errors::{ApiErrorDetail, ResourceError};
pub use page::Page;
pub use query::{Query, MAX_PAGE_SIZE};
pub use resource::{Resource, ResourceDescriptor};

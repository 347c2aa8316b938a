//! The `Resource` trait and resource descriptors.
//!
//! Every Stark Infra entity implements [`Resource`]: it names itself and
//! knows how to build itself from a decoded record (its *maker*). The
//! generic operations in [`operations`](crate::rest::operations) work on a
//! [`ResourceDescriptor`], which pairs that name with the decode function.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use serde::Serialize;
//! use stark_infra::rest::checks::{check_datetime_param, check_param, check_required, Params};
//! use stark_infra::rest::{Resource, ResourceError};
//!
//! #[derive(Debug, Clone, Serialize, PartialEq)]
//! #[serde(rename_all = "camelCase")]
//! pub struct Widget {
//!     #[serde(skip_serializing)]
//!     pub id: Option<String>,
//!     pub name: String,
//!     #[serde(skip_serializing)]
//!     pub created: Option<DateTime<Utc>>,
//! }
//!
//! impl Resource for Widget {
//!     const NAME: &'static str = "Widget";
//!
//!     fn make(params: &mut Params) -> Result<Self, ResourceError> {
//!         Ok(Self {
//!             id: check_param(params, "id")?,
//!             name: check_required(params, "name")?,
//!             created: check_datetime_param(params, "created")?,
//!         })
//!     }
//! }
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::rest::api;
use crate::rest::checks::Params;
use crate::rest::ResourceError;

/// A Stark Infra API entity.
///
/// Implementors are value objects: fully populated by a single call to
/// [`Resource::make`] and never mutated in place by the SDK. Serializing an
/// entity with serde must produce its API JSON (camelCase keys, return-only
/// fields skipped).
pub trait Resource: Serialize + Clone + Send + Sync + Sized + 'static {
    /// The resource name (e.g., "IssuingHolder"). Endpoints and JSON keys
    /// are derived from it.
    const NAME: &'static str;

    /// Builds the entity by consuming its keys from `params`.
    ///
    /// Keys left in `params` afterwards are reported as unknown by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if a required key is missing or a value has
    /// the wrong shape.
    fn make(params: &mut Params) -> Result<Self, ResourceError>;

    /// Returns the descriptor used by the generic REST operations.
    #[must_use]
    fn descriptor() -> ResourceDescriptor<Self> {
        ResourceDescriptor::new(Self::NAME, api::from_api_json::<Self>)
    }
}

/// Pairs a resource name with the function decoding its records.
pub struct ResourceDescriptor<T> {
    name: &'static str,
    maker: fn(Value) -> Result<T, ResourceError>,
}

impl<T> ResourceDescriptor<T> {
    /// Creates a descriptor from a resource name and a maker.
    #[must_use]
    pub const fn new(name: &'static str, maker: fn(Value) -> Result<T, ResourceError>) -> Self {
        Self { name, maker }
    }

    /// Returns the resource name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the endpoint path (e.g., `credit-note/log`).
    #[must_use]
    pub fn endpoint(&self) -> String {
        api::endpoint(self.name)
    }

    /// Returns the key wrapping a single entity in response bodies.
    #[must_use]
    pub fn last_name(&self) -> String {
        api::last_name(self.name)
    }

    /// Returns the key wrapping entity lists in request and response bodies.
    #[must_use]
    pub fn last_name_plural(&self) -> String {
        api::last_name_plural(self.name)
    }

    /// Decodes a raw record through the maker.
    ///
    /// # Errors
    ///
    /// Returns whatever the maker reports.
    pub fn make(&self, raw: Value) -> Result<T, ResourceError> {
        (self.maker)(raw)
    }
}

impl<T> Clone for ResourceDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ResourceDescriptor<T> {}

impl<T> fmt::Debug for ResourceDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

//! Authentication types for the Stark Infra SDK.
//!
//! This module provides the credential types used to identify the caller on
//! every API request.
//!
//! # Overview
//!
//! - [`User`]: The credential bound to a request, either a [`Project`] or an
//!   [`Organization`]
//! - [`RequestSigner`]: Seam for producing the `Access-Signature` header
//! - [`settings`]: Optional process-wide default user
//!
//! # Credential Types
//!
//! - **Projects** act inside a single workspace.
//! - **Organizations** act across workspaces; scope one to a workspace with
//!   [`Organization::with_workspace`] before calling workspace-level endpoints.
//!
//! # Example
//!
//! ```rust
//! use stark_infra::auth::{Organization, Project, User};
//! use stark_infra::{Environment, OrganizationId, ProjectId, WorkspaceId};
//!
//! let project = Project::new(Environment::Sandbox, ProjectId::new("5656565656565656").unwrap());
//! let user = User::from(project);
//! assert_eq!(user.access_id(), "project/5656565656565656");
//!
//! let organization = Organization::new(
//!     Environment::Sandbox,
//!     OrganizationId::new("4545454545454545").unwrap(),
//! )
//! .with_workspace(WorkspaceId::new("123").unwrap());
//! assert_eq!(
//!     User::from(organization).access_id(),
//!     "organization/4545454545454545/workspace/123"
//! );
//! ```

pub mod settings;
mod signer;
mod user;

pub use signer::{RequestSigner, SignError};
pub use user::{Organization, Project, User};

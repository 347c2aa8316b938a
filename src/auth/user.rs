//! Credentials used to authenticate API calls.
//!
//! This module provides the [`User`] type, either a [`Project`] or an
//! [`Organization`], which every request carries.

use std::fmt;
use std::sync::Arc;

use crate::auth::RequestSigner;
use crate::config::{Environment, OrganizationId, ProjectId, WorkspaceId};

/// A project credential.
///
/// Projects are scoped to a single workspace and environment.
#[derive(Clone)]
pub struct Project {
    /// The project id.
    pub id: ProjectId,
    /// The environment the project lives in.
    pub environment: Environment,
    signer: Option<Arc<dyn RequestSigner>>,
}

impl Project {
    /// Creates a project credential without a signer.
    #[must_use]
    pub const fn new(environment: Environment, id: ProjectId) -> Self {
        Self {
            id,
            environment,
            signer: None,
        }
    }

    /// Attaches the signer producing `Access-Signature` headers.
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("id", &self.id)
            .field("environment", &self.environment)
            .field("signer", &self.signer.as_ref().map(|_| "*****"))
            .finish()
    }
}

/// An organization credential, optionally scoped to a workspace.
#[derive(Clone)]
pub struct Organization {
    /// The organization id.
    pub id: OrganizationId,
    /// The environment the organization lives in.
    pub environment: Environment,
    /// The workspace this credential is scoped to, if any.
    pub workspace_id: Option<WorkspaceId>,
    signer: Option<Arc<dyn RequestSigner>>,
}

impl Organization {
    /// Creates an organization credential without workspace or signer.
    #[must_use]
    pub const fn new(environment: Environment, id: OrganizationId) -> Self {
        Self {
            id,
            environment,
            workspace_id: None,
            signer: None,
        }
    }

    /// Returns a copy of this credential scoped to `workspace_id`.
    #[must_use]
    pub fn with_workspace(mut self, workspace_id: WorkspaceId) -> Self {
        self.workspace_id = Some(workspace_id);
        self
    }

    /// Attaches the signer producing `Access-Signature` headers.
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }
}

impl fmt::Debug for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Organization")
            .field("id", &self.id)
            .field("environment", &self.environment)
            .field("workspace_id", &self.workspace_id)
            .field("signer", &self.signer.as_ref().map(|_| "*****"))
            .finish()
    }
}

/// The credential attached to an API call.
///
/// # Thread Safety
///
/// `User` is `Send + Sync` and cheap to clone; the signer is shared.
#[derive(Clone, Debug)]
pub enum User {
    /// A project credential.
    Project(Project),
    /// An organization credential.
    Organization(Organization),
}

impl User {
    /// Returns the value sent in the `Access-Id` header.
    #[must_use]
    pub fn access_id(&self) -> String {
        match self {
            Self::Project(project) => format!("project/{}", project.id),
            Self::Organization(organization) => match &organization.workspace_id {
                Some(workspace_id) => {
                    format!("organization/{}/workspace/{workspace_id}", organization.id)
                }
                None => format!("organization/{}", organization.id),
            },
        }
    }

    /// Returns the environment this credential belongs to.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        match self {
            Self::Project(project) => project.environment,
            Self::Organization(organization) => organization.environment,
        }
    }

    /// Returns the configured signer, if any.
    #[must_use]
    pub fn signer(&self) -> Option<&dyn RequestSigner> {
        match self {
            Self::Project(project) => project.signer.as_deref(),
            Self::Organization(organization) => organization.signer.as_deref(),
        }
    }
}

impl From<Project> for User {
    fn from(project: Project) -> Self {
        Self::Project(project)
    }
}

impl From<Organization> for User {
    fn from(organization: Organization) -> Self {
        Self::Organization(organization)
    }
}

// Verify User is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<User>();
};

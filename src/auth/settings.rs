//! Process-wide default credential.
//!
//! Most applications authenticate with a single credential. Setting it once at
//! startup lets [`RestClient::from_settings`](crate::clients::RestClient::from_settings)
//! build clients without threading the [`User`] around explicitly.
//!
//! # Example
//!
//! ```rust
//! use stark_infra::auth::{settings, Project};
//! use stark_infra::{Environment, ProjectId};
//!
//! settings::set_user(Project::new(Environment::Sandbox, ProjectId::new("1").unwrap()));
//! assert!(settings::user().is_some());
//! settings::clear_user();
//! assert!(settings::user().is_none());
//! ```

use std::sync::{PoisonError, RwLock};

use crate::auth::User;

static DEFAULT_USER: RwLock<Option<User>> = RwLock::new(None);

/// Sets the process-wide default user.
pub fn set_user(user: impl Into<User>) {
    let user = user.into();
    tracing::debug!("Setting default Stark Infra user {}", user.access_id());
    *DEFAULT_USER.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
}

/// Removes the process-wide default user.
pub fn clear_user() {
    *DEFAULT_USER.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Returns a copy of the process-wide default user, if one was set.
#[must_use]
pub fn user() -> Option<User> {
    DEFAULT_USER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

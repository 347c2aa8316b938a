//! Configuration types for the Stark Infra SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Stark Infra.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StarkConfig`]: The main configuration struct holding transport settings
//! - [`StarkConfigBuilder`]: A builder for constructing [`StarkConfig`] instances
//! - [`ProjectId`], [`OrganizationId`], [`WorkspaceId`]: Validated id newtypes
//! - [`HostUrl`]: A validated base URL override
//! - [`Environment`] and [`Language`]: API environment and message language
//!
//! Credentials are not part of the configuration; see [`crate::auth::User`].
//!
//! # Example
//!
//! ```rust
//! use stark_infra::{StarkConfig, Language};
//! use std::time::Duration;
//!
//! let config = StarkConfig::builder()
//!     .language(Language::PtBr)
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```

mod environment;
mod newtypes;

pub use environment::{Environment, Language};
pub use newtypes::{HostUrl, OrganizationId, ProjectId, WorkspaceId};

use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for the Stark Infra SDK.
///
/// This struct holds the transport settings shared by every request made
/// through a [`RestClient`](crate::clients::RestClient).
///
/// # Thread Safety
///
/// `StarkConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use stark_infra::{StarkConfig, HostUrl};
///
/// let config = StarkConfig::builder()
///     .host(HostUrl::new("http://localhost:8080").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
/// ```
#[derive(Clone, Debug)]
pub struct StarkConfig {
    host: Option<HostUrl>,
    language: Language,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl StarkConfig {
    /// Creates a new builder for constructing a `StarkConfig`.
    #[must_use]
    pub fn builder() -> StarkConfigBuilder {
        StarkConfigBuilder::new()
    }

    /// Returns the host URL override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the language for server messages.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Resolves the base URL for requests made in `environment`.
    ///
    /// The host override wins over the environment's URL.
    #[must_use]
    pub fn base_url(&self, environment: Environment) -> String {
        self.host.as_ref().map_or_else(
            || environment.base_url().to_string(),
            HostUrl::base_url,
        )
    }
}

impl Default for StarkConfig {
    fn default() -> Self {
        Self {
            host: None,
            language: Language::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent_prefix: None,
        }
    }
}

// Verify StarkConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StarkConfig>();
};

/// Builder for constructing [`StarkConfig`] instances.
///
/// # Defaults
///
/// - `host`: `None` (use the credential's environment)
/// - `language`: `en-US`
/// - `timeout`: 15 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StarkConfigBuilder {
    host: Option<HostUrl>,
    language: Option<Language>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl StarkConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the language for server messages.
    #[must_use]
    pub const fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StarkConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the timeout is zero.
    pub fn build(self) -> Result<StarkConfig, ConfigError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::HttpClientBuild {
                reason: "timeout must be greater than zero".to_string(),
            });
        }

        Ok(StarkConfig {
            host: self.host,
            language: self.language.unwrap_or_default(),
            timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Validates a numeric Stark Infra identifier.
fn validate_id(kind: &'static str, id: String) -> Result<String, ConfigError> {
    let id = id.trim().to_string();
    if id.is_empty() {
        return Err(ConfigError::EmptyId { kind });
    }
    if !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidId { kind, id });
    }
    Ok(id)
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Creates a new validated ", $kind, " id.")]
            ///
            /// # Errors
            ///
            /// Returns [`ConfigError::EmptyId`] if the id is empty and
            /// [`ConfigError::InvalidId`] if it contains non-digit characters.
            pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
                validate_id($kind, id.into()).map(Self)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::new(s).map_err(de::Error::custom)
            }
        }
    };
}

numeric_id!(
    /// A validated Stark Infra project id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stark_infra::ProjectId;
    ///
    /// let id = ProjectId::new("5656565656565656").unwrap();
    /// assert_eq!(id.as_ref(), "5656565656565656");
    /// ```
    ProjectId,
    "Project"
);

numeric_id!(
    /// A validated Stark Infra organization id.
    OrganizationId,
    "Organization"
);

numeric_id!(
    /// A validated workspace id used to scope organization requests.
    WorkspaceId,
    "Workspace"
);

/// A validated host URL overriding the environment's API base URL.
///
/// This newtype validates that the URL has a proper format with a scheme.
/// It is mostly used to point the SDK at a proxy or a local mock server.
///
/// # Example
///
/// ```rust
/// use stark_infra::HostUrl;
///
/// let url = HostUrl::new("http://localhost:3000").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("localhost"));
/// assert_eq!(url.base_url(), "http://localhost:3000/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if url[host_start..host_end].is_empty() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// Returns the URL with exactly one trailing slash, ready for joining
    /// endpoint paths.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}/", self.url.trim_end_matches('/'))
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

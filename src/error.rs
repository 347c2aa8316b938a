//! Error types for the Stark Infra SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and credential validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use stark_infra::{ProjectId, ConfigError};
//!
//! let result = ProjectId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyId { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration and credential types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A credential identifier cannot be empty.
    #[error("{kind} id cannot be empty. Please provide the id shown in your Stark Infra dashboard.")]
    EmptyId {
        /// The kind of identifier (e.g., "Project", "Organization").
        kind: &'static str,
    },

    /// A credential identifier must only contain digits.
    #[error("Invalid {kind} id '{id}'. Expected a numeric id (e.g., '5656565656565656').")]
    InvalidId {
        /// The kind of identifier.
        kind: &'static str,
        /// The invalid id that was provided.
        id: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Environment name is not recognised.
    #[error("Invalid environment '{environment}'. Expected 'production' or 'sandbox'.")]
    InvalidEnvironment {
        /// The invalid environment name.
        environment: String,
    },

    /// Language is not supported by the API.
    #[error("Invalid language '{language}'. Expected 'en-US' or 'pt-BR'.")]
    InvalidLanguage {
        /// The invalid language tag.
        language: String,
    },

    /// No user was passed and no default user is configured.
    #[error("No user was provided. Pass a Project or Organization explicitly or call settings::set_user() first.")]
    MissingUser,

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {reason}")]
    HttpClientBuild {
        /// Description of the failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_id_error_message() {
        let error = ConfigError::EmptyId { kind: "Project" };
        let message = error.to_string();
        assert!(message.contains("Project id cannot be empty"));
    }

    #[test]
    fn test_invalid_id_error_message() {
        let error = ConfigError::InvalidId {
            kind: "Organization",
            id: "abc".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("abc"));
        assert!(message.contains("numeric"));
    }

    #[test]
    fn test_missing_user_error_message() {
        let message = ConfigError::MissingUser.to_string();
        assert!(message.contains("set_user"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingUser;
        let _: &dyn std::error::Error = &error;
    }
}

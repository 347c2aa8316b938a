//! API environment and language definitions.
//!
//! This module provides the [`Environment`] enum selecting which Stark Infra
//! deployment a credential talks to, and the [`Language`] enum controlling the
//! language of server-side error messages.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Stark Infra API environment.
///
/// Every credential belongs to exactly one environment. The environment
/// determines the API base URL unless a [`HostUrl`](crate::HostUrl) override
/// is configured.
///
/// # Example
///
/// ```rust
/// use stark_infra::Environment;
///
/// let env: Environment = "sandbox".parse().unwrap();
/// assert_eq!(env, Environment::Sandbox);
/// assert_eq!(env.base_url(), "https://sandbox.api.starkinfra.com/v2/");
/// assert_eq!(format!("{}", Environment::Production), "production");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Live environment.
    Production,
    /// Test environment. No real money moves here.
    #[default]
    Sandbox,
}

impl Environment {
    /// Returns the API base URL for this environment, with trailing slash.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.starkinfra.com/v2/",
            Self::Sandbox => "https://sandbox.api.starkinfra.com/v2/",
        }
    }

    /// Returns the environment name as used in configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Sandbox => "sandbox",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            _ => Err(ConfigError::InvalidEnvironment {
                environment: s.to_string(),
            }),
        }
    }
}

/// Language requested for server messages through the `Accept-Language` header.
///
/// # Example
///
/// ```rust
/// use stark_infra::Language;
///
/// let lang: Language = "pt-BR".parse().unwrap();
/// assert_eq!(lang.as_str(), "pt-BR");
/// assert_eq!(Language::default(), Language::EnUs);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English (United States).
    #[default]
    EnUs,
    /// Portuguese (Brazil).
    PtBr,
}

impl Language {
    /// Returns the language tag sent to the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::PtBr => "pt-BR",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en-US" => Ok(Self::EnUs),
            "pt-BR" => Ok(Self::PtBr),
            _ => Err(ConfigError::InvalidLanguage {
                language: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parses_case_insensitively() {
        assert_eq!(
            "Production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            " sandbox ".parse::<Environment>().unwrap(),
            Environment::Sandbox
        );
    }

    #[test]
    fn test_environment_rejects_unknown_names() {
        let result = "staging".parse::<Environment>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvironment { environment }) if environment == "staging"
        ));
    }

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(
            Environment::Production.base_url(),
            "https://api.starkinfra.com/v2/"
        );
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://sandbox.api.starkinfra.com/v2/"
        );
    }

    #[test]
    fn test_language_round_trips_through_display() {
        for language in [Language::EnUs, Language::PtBr] {
            let parsed: Language = language.to_string().parse().unwrap();
            assert_eq!(parsed, language);
        }
    }

    #[test]
    fn test_language_rejects_unknown_tags() {
        assert!("fr-FR".parse::<Language>().is_err());
    }
}

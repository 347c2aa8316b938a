//! Request signing seam.
//!
//! Stark Infra authenticates requests with a signature over
//! `"{access_id}:{access_time}:{body}"`. The SDK does not bundle a signing
//! algorithm; callers plug one in through [`RequestSigner`].

use thiserror::Error;

/// Produces the `Access-Signature` header value for a request.
///
/// # Example
///
/// ```rust
/// use stark_infra::auth::{RequestSigner, SignError};
///
/// #[derive(Debug)]
/// struct StaticSigner;
///
/// impl RequestSigner for StaticSigner {
///     fn sign(&self, message: &str) -> Result<String, SignError> {
///         Ok(format!("signed:{}", message.len()))
///     }
/// }
///
/// assert_eq!(StaticSigner.sign("abc").unwrap(), "signed:3");
/// ```
pub trait RequestSigner: Send + Sync + std::fmt::Debug {
    /// Signs `message` and returns the encoded signature.
    ///
    /// # Errors
    ///
    /// Returns [`SignError`] if the signature cannot be produced.
    fn sign(&self, message: &str) -> Result<String, SignError>;
}

/// Error returned by a [`RequestSigner`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to sign request: {reason}")]
pub struct SignError {
    /// Description of the failure.
    pub reason: String,
}

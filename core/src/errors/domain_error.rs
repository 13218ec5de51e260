//! Domain error taxonomy
//!
//! Four families of failure cross the handler boundary:
//! - `Validation` - malformed or missing input, recoverable by resubmission
//! - `Code` - verification-code lifecycle failures
//! - `Dependency` - an external collaborator (mail relay, store, identity
//!   service) failed; single attempt, no automatic retry
//! - `Configuration` - required credentials or settings are absent
//!
//! HTTP status mapping happens in the presentation layer.

use thiserror::Error;

/// Result alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Verification-code lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("No verification code found for this address")]
    NotFound,

    #[error("Verification code has expired")]
    Expired,

    #[error("Invalid verification code, {remaining} attempt(s) remaining")]
    Mismatch { remaining: u32 },

    #[error("Maximum verification attempts exceeded, request a new code")]
    AttemptsExhausted,
}

/// Top-level domain error
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error(transparent)]
    Code(#[from] CodeError),

    #[error("{service} failure: {message}")]
    Dependency { service: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    /// Validation failure with a caller-facing message
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Failure of a named external collaborator
    pub fn dependency(service: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::Dependency {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Missing or invalid configuration
    pub fn configuration(message: impl Into<String>) -> Self {
        DomainError::Configuration {
            message: message.into(),
        }
    }

    /// Whether the client can recover by resubmitting corrected input
    pub fn is_client_error(&self) -> bool {
        matches!(self, DomainError::Validation { .. } | DomainError::Code(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_errors_are_client_errors() {
        assert!(DomainError::from(CodeError::Expired).is_client_error());
        assert!(DomainError::validation("bad email").is_client_error());
        assert!(!DomainError::dependency("email", "relay down").is_client_error());
        assert!(!DomainError::configuration("SMTP_FROM missing").is_client_error());
    }

    #[test]
    fn mismatch_message_names_remaining_attempts() {
        let err = CodeError::Mismatch { remaining: 3 };
        assert!(err.to_string().contains("3 attempt(s) remaining"));
    }
}

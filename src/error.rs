//! Error types for the Aquarium API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use aquarium_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid Aquarium URL '{url}'. Please provide an http(s) URL with a host (e.g., 'https://aquarium.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Aquarium token.")]
    EmptyToken,

    /// Access token contains characters that cannot be sent in a header.
    #[error("Access token contains characters that are not allowed in an HTTP header.")]
    InvalidToken,

    /// Tenant domain cannot be empty.
    #[error("Domain cannot be empty. Omit the domain instead of passing an empty string.")]
    EmptyDomain,

    /// Tenant domain contains characters that cannot be sent in a header.
    #[error("Invalid domain '{domain}'. The domain must be a valid HTTP header value.")]
    InvalidDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected a path segment such as 'v1'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_error_message() {
        let error = ConfigError::EmptyToken;
        let message = error.to_string();
        assert!(message.contains("Access token cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("http(s)"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let message = error.to_string();
        assert!(message.contains("base_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyDomain;
        let _: &dyn std::error::Error = &error;
    }
}

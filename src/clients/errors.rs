//! HTTP-specific error types for the Aquarium API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors, body decoding failures, and request validation failures.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses, carrying the raw body text
//! - [`BodyReadError`]: The body of a non-2xx response could not be read
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use aquarium_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(value) => println!("Success: {}", value),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//!     Err(other) => println!("Request failed: {}", other),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message is the response body text, verbatim. It is not parsed, even
/// when it looks like JSON; callers needing structured server detail parse
/// it themselves.
///
/// # Example
///
/// ```rust
/// use aquarium_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "not found".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
}

/// Error returned when the body of a non-successful response cannot be read.
#[derive(Debug, Error)]
#[error("error during fetch")]
pub struct BodyReadError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The underlying read failure.
    #[source]
    pub source: reqwest::Error,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
///
/// # Example
///
/// ```rust
/// use aquarium_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::BodyNotAllowed {
///     method: "GET".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot send a body with GET.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The HTTP method is not one of the supported methods.
    #[error("Invalid Http method {method}.")]
    InvalidMethod {
        /// The invalid method that was provided.
        method: String,
    },

    /// A body was attached to a method that does not take one.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method of the request.
        method: String,
    },

    /// A header value contains characters that cannot be sent.
    #[error("Invalid value for header {name}.")]
    InvalidHeader {
        /// The name of the header.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use aquarium_api::HttpError;
///
/// match client.request(request).await {
///     Ok(value) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* non-2xx, e.message is the body */ }
///     Err(HttpError::BodyRead(e)) => { /* non-2xx, body unreadable */ }
///     Err(HttpError::Decode { .. }) => { /* 2xx but not JSON */ }
///     Err(HttpError::InvalidRequest(e)) => { /* rejected before sending */ }
///     Err(HttpError::InvalidUrl(e)) => { /* path produced a malformed URL */ }
///     Err(HttpError::Network(e)) => { /* transport failure */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The body of a non-2xx response could not be read.
    #[error(transparent)]
    BodyRead(#[from] BodyReadError),

    /// A 2xx response body was not valid JSON.
    #[error("Failed to decode response body (status {code}): {source}")]
    Decode {
        /// The HTTP status code of the response.
        code: u16,
        /// The JSON parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request URL could not be constructed.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::BodyRead(e) => Some(e.code),
            Self::Decode { code, .. } => Some(*code),
            _ => None,
        }
    }
}

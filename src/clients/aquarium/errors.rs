//! Error types for the Aquarium client.
//!
//! # Example
//!
//! ```rust,ignore
//! use aquarium_api::{AquariumClient, AquariumError, HttpError};
//!
//! match client.get("items/123456", None).await {
//!     Ok(item) => println!("Item: {}", item),
//!     Err(e) if e.is_not_found() => println!("No such item"),
//!     Err(AquariumError::Http(HttpError::Response(e))) => {
//!         println!("Server said {}: {}", e.code, e.message);
//!     }
//!     Err(e) => println!("Request failed: {}", e),
//! }
//! ```

use crate::clients::{HttpError, HttpResponseError};
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for [`AquariumClient`](super::AquariumClient) operations.
#[derive(Debug, Error)]
pub enum AquariumError {
    /// Client construction or token handling failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl AquariumError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::Config(_) => None,
        }
    }

    /// Returns the non-2xx response error, if this is one.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Http(HttpError::Response(e)) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` if the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the server answered 401.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

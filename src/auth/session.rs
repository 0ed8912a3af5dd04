//! Session state for Aquarium API authentication.
//!
//! This module provides the [`Session`] type holding everything needed to
//! address and authenticate requests: the server origin, the versioned base
//! URL, the bearer token and the tenant domain.

use parking_lot::RwLock;
use url::Url;

use crate::config::{AccessToken, AquariumConfig, ApiVersion, BaseUrl, TenantDomain};
use crate::error::ConfigError;

/// Per-client authentication and addressing state.
///
/// The origin, API version and resolved base URL are fixed at construction.
/// The token and domain can change over the session's lifetime: sign-in
/// stores a fresh token, and callers may restore or clear one explicitly.
///
/// Requests read the token and domain once, when their headers are built.
/// A request already in flight keeps the values it captured.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`; clients share it behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use aquarium_api::{AccessToken, ApiVersion, BaseUrl, Session};
///
/// let session = Session::new(
///     BaseUrl::new("https://aquarium.example.com/some/path").unwrap(),
///     ApiVersion::V1,
///     None,
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(session.base_url().as_str(), "https://aquarium.example.com/v1/");
/// assert!(!session.is_authenticated());
///
/// session.set_token(AccessToken::new("token").unwrap());
/// assert!(session.is_authenticated());
/// ```
#[derive(Debug)]
pub struct Session {
    origin: BaseUrl,
    api_version: ApiVersion,
    base_url: Url,
    token: RwLock<Option<AccessToken>>,
    domain: RwLock<Option<TenantDomain>>,
}

impl Session {
    /// Creates a new session.
    ///
    /// The base URL is the origin with its path replaced by `/{api_version}/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the version is not a
    /// single URL path segment, or [`ConfigError::InvalidBaseUrl`] if the
    /// versioned URL cannot be resolved against the origin.
    pub fn new(
        origin: BaseUrl,
        api_version: ApiVersion,
        token: Option<AccessToken>,
        domain: Option<TenantDomain>,
    ) -> Result<Self, ConfigError> {
        if !api_version.is_valid() {
            return Err(ConfigError::InvalidApiVersion {
                version: api_version.to_string(),
            });
        }

        let base_url = origin
            .as_url()
            .join(&format!("/{api_version}/"))
            .map_err(|_| ConfigError::InvalidBaseUrl {
                url: origin.to_string(),
            })?;

        Ok(Self {
            origin,
            api_version,
            base_url,
            token: RwLock::new(token),
            domain: RwLock::new(domain),
        })
    }

    /// Creates a session from an [`AquariumConfig`].
    ///
    /// # Errors
    ///
    /// See [`Session::new`].
    pub fn from_config(config: &AquariumConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.base_url().clone(),
            config.api_version().clone(),
            config.token().cloned(),
            config.domain().cloned(),
        )
    }

    /// Returns the server URL this session was created with.
    #[must_use]
    pub const fn origin(&self) -> &BaseUrl {
        &self.origin
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the versioned base URL every request path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns a snapshot of the current token.
    #[must_use]
    pub fn token(&self) -> Option<AccessToken> {
        self.token.read().clone()
    }

    /// Returns a snapshot of the current tenant domain.
    #[must_use]
    pub fn domain(&self) -> Option<TenantDomain> {
        self.domain.read().clone()
    }

    /// Returns `true` if a token is currently set.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Replaces the token used by subsequent requests.
    pub fn set_token(&self, token: AccessToken) {
        *self.token.write() = Some(token);
    }

    /// Removes the token, returning the previous one.
    pub fn clear_token(&self) -> Option<AccessToken> {
        self.token.write().take()
    }

    /// Replaces the tenant domain used by subsequent requests.
    pub fn set_domain(&self, domain: TenantDomain) {
        *self.domain.write() = Some(domain);
    }

    /// Removes the tenant domain, returning the previous one.
    pub fn clear_domain(&self) -> Option<TenantDomain> {
        self.domain.write().take()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

//! Configuration types for the Aquarium API SDK.
//!
//! This module provides the configuration types used to initialize an
//! Aquarium client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AquariumConfig`]: The configuration struct holding all SDK settings
//! - [`AquariumConfigBuilder`]: A builder for constructing [`AquariumConfig`] instances
//! - [`BaseUrl`]: A validated Aquarium server URL
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`TenantDomain`]: A validated tenant domain
//! - [`ApiVersion`]: The Aquarium API version to use
//!
//! # Example
//!
//! ```rust
//! use aquarium_api::{AquariumConfig, BaseUrl, AccessToken, ApiVersion};
//!
//! let config = AquariumConfig::builder()
//!     .base_url(BaseUrl::new("https://aquarium.example.com").unwrap())
//!     .token(AccessToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, BaseUrl, TenantDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Aquarium API SDK.
///
/// # Thread Safety
///
/// `AquariumConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use aquarium_api::{AquariumConfig, BaseUrl, TenantDomain};
///
/// let config = AquariumConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
///     .domain(TenantDomain::new("studio").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(config.token().is_none());
/// assert_eq!(config.domain().map(AsRef::as_ref), Some("studio"));
/// ```
#[derive(Clone, Debug)]
pub struct AquariumConfig {
    base_url: BaseUrl,
    token: Option<AccessToken>,
    domain: Option<TenantDomain>,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl AquariumConfig {
    /// Creates a new builder for constructing an `AquariumConfig`.
    #[must_use]
    pub fn builder() -> AquariumConfigBuilder {
        AquariumConfigBuilder::new()
    }

    /// Returns the server URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the initial access token, if configured.
    #[must_use]
    pub const fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Returns the tenant domain, if configured.
    #[must_use]
    pub const fn domain(&self) -> Option<&TenantDomain> {
        self.domain.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify AquariumConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AquariumConfig>();
};

/// Builder for constructing [`AquariumConfig`] instances.
///
/// The only required field is `base_url`.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::V1`]
/// - `token`: `None`
/// - `domain`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct AquariumConfigBuilder {
    base_url: Option<BaseUrl>,
    token: Option<AccessToken>,
    domain: Option<TenantDomain>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl AquariumConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Aquarium server URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets a personal access token or a previously saved token.
    #[must_use]
    pub fn token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the tenant domain sent with every request.
    #[must_use]
    pub fn domain(mut self, domain: TenantDomain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AquariumConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<AquariumConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(AquariumConfig {
            base_url,
            token: self.token,
            domain: self.domain,
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::header::HeaderValue;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

/// A validated Aquarium server URL.
///
/// The URL must use the `http` or `https` scheme and carry a host. Any path
/// it carries is ignored when the versioned API URL is resolved.
///
/// # Example
///
/// ```rust
/// use aquarium_api::BaseUrl;
///
/// let url = BaseUrl::new("https://aquarium.example.com").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("aquarium.example.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed,
    /// does not use `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let parsed = Url::parse(url.trim()).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid());
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(invalid());
        }

        Ok(Self(parsed))
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Aquarium access token.
///
/// The token is sent verbatim in the `authorization` header, so it must be
/// non-empty and a legal header value. Its value is masked in debug output
/// and the header it produces is flagged as sensitive.
///
/// # Example
///
/// ```rust
/// use aquarium_api::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    header: HeaderValue,
}

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty, or
    /// [`ConfigError::InvalidToken`] if it cannot be used as a header value.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let value = token.into();
        if value.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        let mut header = HeaderValue::from_str(&value).map_err(|_| ConfigError::InvalidToken)?;
        header.set_sensitive(true);
        Ok(Self { value, header })
    }

    pub(crate) const fn header_value(&self) -> &HeaderValue {
        &self.header
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken(*****)")
    }
}

/// A validated tenant domain, sent in the `aquarium-domain` header.
///
/// The domain selects which logical Aquarium tenant a request targets. It is
/// mainly needed for unauthenticated requests against a server reached
/// without its own DNS name (local or development servers).
///
/// # Example
///
/// ```rust
/// use aquarium_api::TenantDomain;
///
/// let domain = TenantDomain::new("studio.aquarium.app").unwrap();
/// assert_eq!(domain.as_ref(), "studio.aquarium.app");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TenantDomain {
    value: String,
    header: HeaderValue,
}

impl TenantDomain {
    /// Creates a new validated tenant domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDomain`] if the domain is empty, or
    /// [`ConfigError::InvalidDomain`] if it cannot be used as a header value.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let value = domain.into();
        if value.is_empty() {
            return Err(ConfigError::EmptyDomain);
        }
        let header = HeaderValue::from_str(&value)
            .map_err(|_| ConfigError::InvalidDomain { domain: value.clone() })?;
        Ok(Self { value, header })
    }

    pub(crate) const fn header_value(&self) -> &HeaderValue {
        &self.header
    }
}

impl AsRef<str> for TenantDomain {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for TenantDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

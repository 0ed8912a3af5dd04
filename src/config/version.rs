//! Aquarium API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Aquarium API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Aquarium API version.
///
/// The version is the first path segment of every API URL
/// (`https://host/v1/...`). Aquarium currently serves a single stable
/// version; `Custom` allows targeting a newer one without an SDK release.
///
/// # Example
///
/// ```rust
/// use aquarium_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version, ApiVersion::V1);
///
/// // Parse from string
/// let version: ApiVersion = "v1".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1);
///
/// // Display as path segment
/// assert_eq!(format!("{}", ApiVersion::V1), "v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 1.
    V1,
    /// Custom version segment for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1
    }

    /// Returns `true` if this is a known stable API version.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns `true` if this version is usable as a single URL path segment.
    ///
    /// Versions parsed with [`FromStr`] always are; a hand-built
    /// [`ApiVersion::Custom`] may not be.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::V1 => true,
            Self::Custom(version) => is_valid_segment(version),
        }
    }

    /// Returns the path segment for this version.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V1 => "v1",
            Self::Custom(version) => version,
        }
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_matches('/');
        match s {
            "v1" | "V1" => Ok(Self::V1),
            _ if is_valid_segment(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}

// A single, non-empty URL path segment made of unreserved characters.
fn is_valid_segment(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

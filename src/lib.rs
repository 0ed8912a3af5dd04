//! # Aquarium API Rust SDK
//!
//! A Rust client for the Aquarium resource-graph API, providing type-safe
//! configuration, session handling and an async HTTP client.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`AquariumConfig`] and [`AquariumConfigBuilder`]
//! - Validated newtypes for the server URL, access token and tenant domain
//! - A [`Session`] shared by all clones of a client
//! - Sign-in for users and bots, storing the returned token in the session
//! - Verb methods for arbitrary API paths returning [`serde_json::Value`]
//! - Serde shapes of the server records in [`types`]
//!
//! ## Quick Start
//!
//! ```rust
//! use aquarium_api::{AquariumConfig, BaseUrl, AccessToken, ApiVersion};
//!
//! let config = AquariumConfig::builder()
//!     .base_url(BaseUrl::new("https://aquarium.example.com").unwrap())
//!     .token(AccessToken::new("personal-access-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Signing In
//!
//! ```rust,ignore
//! use aquarium_api::AquariumClient;
//!
//! let client = AquariumClient::new("https://aquarium.example.com", None, None)?;
//! let response = client.signin("jane@example.com", "password").await?;
//! // The token is now in the session and gone from `response`
//! assert!(client.session().is_authenticated());
//!
//! let me = client.me().await?;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use aquarium_api::{AquariumClient, QueryParams, RequestBody};
//! use serde_json::json;
//!
//! let client = AquariumClient::new("https://aquarium.example.com", Some("token"), None)?;
//!
//! let query = QueryParams::new().with("type", "Shot").with("type", "Asset");
//! let items = client.get("items", Some(query)).await?;
//!
//! let body = json!({"type": "Shot", "data": {"name": "sh010"}});
//! let created = client.post("items", None, Some(body.into())).await?;
//!
//! // Multipart forms are passed through with their own content type
//! let form = reqwest::multipart::Form::new().text("name", "thumbnail");
//! client.post("attachments", None, Some(RequestBody::from(form))).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One round-trip per call**: Nothing is retried or cached

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod types;

// Re-export public types at crate root for convenience
pub use auth::Session;
pub use config::{
    AccessToken, AquariumConfig, AquariumConfigBuilder, ApiVersion, BaseUrl, TenantDomain,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    AquariumClient, AquariumError, BodyReadError, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponseError, InvalidHttpRequestError, QueryParams, RequestBody,
};

//! HTTP client types for Aquarium API communication.
//!
//! This module provides the request dispatcher that every Aquarium call goes
//! through, and the [`AquariumClient`] facade built on top of it.
//!
//! # Overview
//!
//! - [`HttpClient`]: resolves URLs, attaches session headers, sends one request
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`RequestBody`]: a JSON value or an opaque multipart/bytes payload
//! - [`QueryParams`]: ordered query parameters, repeated keys allowed
//! - [`aquarium::AquariumClient`]: verb methods and sign-in
//! - [`aquarium::AquariumError`]: facade error type
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use aquarium_api::{BaseUrl, Session};
//! use aquarium_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let session = Session::new(
//!     BaseUrl::new("https://aquarium.example.com")?,
//!     Default::default(),
//!     None,
//!     None,
//! )?;
//! let client = HttpClient::new(Arc::new(session), None)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "users/me").build()?;
//! let me = client.request(request).await?;
//! ```
//!
//! # Outcome
//!
//! Every request has exactly one outcome. Nothing is retried, and two
//! identical calls are two round-trips.

pub mod aquarium;
mod errors;
mod http_client;
mod http_request;
mod query;

pub use errors::{BodyReadError, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, DOMAIN_HEADER, JSON_CONTENT_TYPE, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use query::QueryParams;

// Re-export the Aquarium client types at the clients module level
pub use aquarium::{AquariumClient, AquariumError};

//! Aquarium API client implementation.
//!
//! This module provides the [`AquariumClient`] type: the HTTP verbs bound to
//! one Aquarium server, plus sign-in operations that populate the session
//! token.

use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::auth::signin::{
    bot_signin_body, bot_signin_path, signin_body, take_token, ME_PATH, SIGNIN_PATH,
};
use crate::auth::Session;
use crate::clients::aquarium::AquariumError;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, QueryParams, RequestBody};
use crate::config::{AccessToken, AquariumConfig, ApiVersion, BaseUrl, TenantDomain};

/// Client for the Aquarium API.
///
/// Provides `get`, `post`, `put`, `patch` and `delete` for arbitrary API
/// paths, and `signin`, `signin_bot` and `me` for authentication.
///
/// Every call is a single round-trip.
/// Successful responses are returned as raw [`Value`]s; use the
/// [`types`](crate::types) module to deserialize them.
///
/// # Thread Safety
///
/// `AquariumClient` is `Send + Sync`. Clones share the same [`Session`], so
/// a sign-in through one clone authenticates all of them.
///
/// # Example
///
/// ```rust,ignore
/// use aquarium_api::{AquariumClient, QueryParams};
/// use serde_json::json;
///
/// let client = AquariumClient::new("https://aquarium.example.com", None, None)?;
/// client.signin("jane@example.com", "password").await?;
///
/// // GET request
/// let item = client.get("items/123456", None).await?;
///
/// // POST request with query parameters and body
/// let query = QueryParams::new().with("populate", true);
/// let body = json!({"query": "# -($Child)> 0,1 $Shot"});
/// let shots = client.post("items/123456/query", Some(query), Some(body.into())).await?;
/// ```
#[derive(Clone, Debug)]
pub struct AquariumClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify AquariumClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AquariumClient>();
};

impl AquariumClient {
    /// Creates a new client for the server at `url`.
    ///
    /// Empty `token` or `domain` strings are treated as absent.
    ///
    /// # Arguments
    ///
    /// * `url` - The Aquarium server URL, with scheme and port if needed
    /// * `token` - A personal access token or a saved token
    /// * `domain` - The tenant domain, mainly for unauthenticated requests
    ///   against a server without its own DNS name
    ///
    /// # Errors
    ///
    /// Returns [`AquariumError::Config`] if any value fails validation, or
    /// [`AquariumError::Http`] if the HTTP client cannot be created.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aquarium_api::AquariumClient;
    ///
    /// let client = AquariumClient::new("http://localhost:8080", None, Some("studio")).unwrap();
    /// assert_eq!(client.base_url().as_str(), "http://localhost:8080/v1/");
    /// ```
    pub fn new(url: &str, token: Option<&str>, domain: Option<&str>) -> Result<Self, AquariumError> {
        let mut builder = AquariumConfig::builder().base_url(BaseUrl::new(url)?);

        if let Some(token) = token.filter(|token| !token.is_empty()) {
            builder = builder.token(AccessToken::new(token)?);
        }
        if let Some(domain) = domain.filter(|domain| !domain.is_empty()) {
            builder = builder.domain(TenantDomain::new(domain)?);
        }

        Self::from_config(&builder.build()?)
    }

    /// Creates a new client from an [`AquariumConfig`].
    ///
    /// # Errors
    ///
    /// See [`AquariumClient::new`].
    pub fn from_config(config: &AquariumConfig) -> Result<Self, AquariumError> {
        let session = Session::from_config(config)?;
        Self::with_session(Arc::new(session), Some(config))
    }

    /// Creates a new client with a specific API version override.
    ///
    /// # Errors
    ///
    /// See [`AquariumClient::new`].
    pub fn with_version(config: &AquariumConfig, version: ApiVersion) -> Result<Self, AquariumError> {
        let config_version = config.api_version();
        if &version == config_version {
            tracing::debug!(
                "Aquarium client has a redundant API version override to the default {}",
                config_version
            );
        } else {
            tracing::debug!(
                "Aquarium client overriding default API version {} with {}",
                config_version,
                version
            );
        }

        let session = Session::new(
            config.base_url().clone(),
            version,
            config.token().cloned(),
            config.domain().cloned(),
        )?;
        Self::with_session(Arc::new(session), Some(config))
    }

    /// Creates a new client bound to an existing session.
    ///
    /// # Errors
    ///
    /// Returns [`AquariumError::Http`] if the HTTP client cannot be created.
    pub fn with_session(
        session: Arc<Session>,
        config: Option<&AquariumConfig>,
    ) -> Result<Self, AquariumError> {
        let http_client = HttpClient::new(session, config)?;
        Ok(Self { http_client })
    }

    /// Returns the session used by this client.
    #[must_use]
    pub fn session(&self) -> &Session {
        self.http_client.session()
    }

    /// Returns the versioned base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.http_client.base_url()
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub fn api_version(&self) -> &ApiVersion {
        self.session().api_version()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a request with an explicit method.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method
    /// * `path` - The path relative to the versioned base URL (e.g., "users/me")
    /// * `query` - Optional query parameters
    /// * `body` - Optional request body
    ///
    /// # Errors
    ///
    /// Returns [`AquariumError::Http`] for any dispatch failure; see
    /// [`HttpClient::request`].
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<QueryParams>,
        body: Option<RequestBody>,
    ) -> Result<Value, AquariumError> {
        let request = HttpRequest::builder(method, path)
            .maybe_query(query)
            .maybe_body(body)
            .build()
            .map_err(HttpError::from)?;

        Ok(self.http_client.request(request).await?)
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`AquariumClient::request`].
    pub async fn get(&self, path: &str, query: Option<QueryParams>) -> Result<Value, AquariumError> {
        self.request(HttpMethod::Get, path, query, None).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`AquariumClient::request`].
    pub async fn post(
        &self,
        path: &str,
        query: Option<QueryParams>,
        body: Option<RequestBody>,
    ) -> Result<Value, AquariumError> {
        self.request(HttpMethod::Post, path, query, body).await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`AquariumClient::request`].
    pub async fn put(
        &self,
        path: &str,
        query: Option<QueryParams>,
        body: Option<RequestBody>,
    ) -> Result<Value, AquariumError> {
        self.request(HttpMethod::Put, path, query, body).await
    }

    /// Sends a PATCH request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`AquariumClient::request`].
    pub async fn patch(
        &self,
        path: &str,
        query: Option<QueryParams>,
        body: Option<RequestBody>,
    ) -> Result<Value, AquariumError> {
        self.request(HttpMethod::Patch, path, query, body).await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`AquariumClient::request`].
    pub async fn delete(
        &self,
        path: &str,
        query: Option<QueryParams>,
        body: Option<RequestBody>,
    ) -> Result<Value, AquariumError> {
        self.request(HttpMethod::Delete, path, query, body).await
    }

    /// Signs in a user and stores the returned token in the session.
    ///
    /// The token is removed from the returned value; the rest of the
    /// response (typically `{"user": {...}}`) is returned as-is.
    ///
    /// # Errors
    ///
    /// Any failure of the underlying POST is returned unchanged. Returns
    /// [`AquariumError::Config`] if the returned token is not a valid header
    /// value, in which case the session is not modified.
    pub async fn signin(&self, email: &str, password: &str) -> Result<Value, AquariumError> {
        let body = signin_body(email, password);
        let response = self.post(SIGNIN_PATH, None, Some(body.into())).await?;
        self.store_token(response)
    }

    /// Signs in a bot and stores the returned token in the session.
    ///
    /// # Errors
    ///
    /// See [`AquariumClient::signin`].
    pub async fn signin_bot(&self, key: &str, secret: &str) -> Result<Value, AquariumError> {
        let body = bot_signin_body(secret);
        let response = self
            .post(&bot_signin_path(key), None, Some(body.into()))
            .await?;
        self.store_token(response)
    }

    /// Returns the currently authenticated user.
    ///
    /// # Errors
    ///
    /// See [`AquariumClient::request`].
    pub async fn me(&self) -> Result<Value, AquariumError> {
        self.get(ME_PATH, None).await
    }

    fn store_token(&self, mut response: Value) -> Result<Value, AquariumError> {
        if let Some(token) = take_token(&mut response)? {
            self.session().set_token(token);
            tracing::debug!("Stored session token from sign-in response");
        }
        Ok(response)
    }
}

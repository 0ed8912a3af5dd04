//! HTTP client for Aquarium API communication.
//!
//! This module provides the [`HttpClient`] type, which performs exactly one
//! network round-trip per request and normalizes the outcome into a single
//! `Result`.

use std::sync::Arc;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::auth::Session;
use crate::clients::errors::{BodyReadError, HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpRequest, RequestBody};
use crate::clients::query::QueryParams;
use crate::config::AquariumConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the tenant domain.
pub const DOMAIN_HEADER: &str = "aquarium-domain";

/// Content type attached to every request that is not an opaque body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// HTTP client for making requests to the Aquarium API.
///
/// The client handles:
/// - URL resolution against the session's versioned base URL
/// - Default headers including User-Agent
/// - `authorization` and `aquarium-domain` headers from the session
/// - JSON body serialization and pass-through of opaque bodies
/// - A cookie store, so session cookies set by the server are sent back
///
/// There is no retry, timeout or caching: each call is one round-trip.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
/// Cloning it is cheap and clones share the session and connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use aquarium_api::{ApiVersion, BaseUrl, Session};
/// use aquarium_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let session = Session::new(
///     BaseUrl::new("https://aquarium.example.com").unwrap(),
///     ApiVersion::V1,
///     None,
///     None,
/// )?;
/// let client = HttpClient::new(Arc::new(session), None)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "users/me").build()?;
/// let me = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Session providing the base URL, token and domain.
    session: Arc<Session>,
    /// Default headers to include in all requests.
    default_headers: HeaderMap,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given session.
    ///
    /// # Arguments
    ///
    /// * `session` - The session providing base URL, token and domain
    /// * `config` - Optional configuration for `user_agent_prefix`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the user agent prefix is not a
    /// valid header value, or [`HttpError::Network`] if the underlying
    /// reqwest client cannot be created.
    pub fn new(session: Arc<Session>, config: Option<&AquariumConfig>) -> Result<Self, HttpError> {
        // Build User-Agent header
        let user_agent_prefix = config
            .and_then(AquariumConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Aquarium API Library v{SDK_VERSION} | Rust {rust_version}");
        let user_agent = HeaderValue::from_str(&user_agent).map_err(|_| {
            InvalidHttpRequestError::InvalidHeader {
                name: USER_AGENT.to_string(),
            }
        })?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, user_agent);
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            session,
            default_headers,
        })
    }

    /// Returns the session shared by this client.
    #[must_use]
    pub const fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Returns the versioned base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.session.base_url()
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Resolves `path` against the base URL and appends `query`.
    ///
    /// The path is appended to the base URL text before parsing, so it is
    /// never escaped beyond what URL parsing does on its own. Query entries
    /// are appended in order, repeated keys included.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if the resulting URL is malformed.
    pub fn resolve_url(&self, path: &str, query: Option<&QueryParams>) -> Result<Url, HttpError> {
        let mut url = Url::parse(&format!("{}{path}", self.session.base_url()))?;

        if let Some(query) = query.filter(|query| !query.is_empty()) {
            url.query_pairs_mut().extend_pairs(query.rendered());
        }

        Ok(url)
    }

    /// Builds the headers for a request carrying `body`.
    ///
    /// The token and domain are read from the session at call time.
    #[must_use]
    pub fn request_headers(&self, body: Option<&RequestBody>) -> HeaderMap {
        let mut headers = self.default_headers.clone();

        if let Some(token) = self.session.token() {
            headers.insert(AUTHORIZATION, token.header_value().clone());
        }
        if let Some(domain) = self.session.domain() {
            headers.insert(
                HeaderName::from_static(DOMAIN_HEADER),
                domain.header_value().clone(),
            );
        }
        if !body.is_some_and(RequestBody::is_opaque) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        headers
    }

    /// Sends an HTTP request to the Aquarium API.
    ///
    /// Success responses (2xx) are decoded as JSON. `204 No Content` and
    /// `205 Reset Content` resolve to [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The URL cannot be built (`InvalidUrl`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`, with the raw body text)
    /// - A non-2xx body cannot be read (`BodyRead`)
    /// - A 2xx body other than 204/205 is not valid JSON, empty included (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<Value, HttpError> {
        request.verify()?;

        let url = self.resolve_url(&request.path, request.query.as_ref())?;
        let headers = self.request_headers(request.body.as_ref());

        tracing::debug!(
            method = %request.http_method,
            url = %url,
            "Sending request to Aquarium"
        );

        let req_builder = self
            .client
            .request(request.http_method.into(), url)
            .headers(headers);

        let req_builder = match request.body {
            Some(RequestBody::Json(value)) => req_builder.body(value.to_string()),
            Some(RequestBody::Multipart(form)) => req_builder.multipart(form),
            Some(RequestBody::Bytes(bytes)) => req_builder.body(bytes),
            None => req_builder,
        };

        let res = req_builder.send().await?;

        let status = res.status();
        let code = status.as_u16();
        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Received response from Aquarium"
        );

        if status.is_success() {
            // 204 and 205 never carry a body; every other success must be JSON.
            if matches!(status, StatusCode::NO_CONTENT | StatusCode::RESET_CONTENT) {
                return Ok(Value::Null);
            }
            let body = res.bytes().await?;
            return serde_json::from_slice(&body).map_err(|source| HttpError::Decode { code, source });
        }

        match res.text().await {
            Ok(message) => Err(HttpResponseError { code, message }.into()),
            Err(source) => Err(BodyReadError { code, source }.into()),
        }
    }
}

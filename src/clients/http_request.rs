//! HTTP request types for the Aquarium API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Aquarium API.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::query::QueryParams;

/// HTTP methods supported by the Aquarium API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and running actions.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partially updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if requests with this method may carry a body.
    #[must_use]
    pub const fn allows_body(&self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = InvalidHttpRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(InvalidHttpRequestError::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Body of an HTTP request.
///
/// JSON bodies are serialized and sent with a JSON content type. Multipart
/// and byte bodies are opaque: they are passed through untouched and the
/// client does not force a content type on them (multipart forms set their
/// own, including the boundary).
///
/// # Example
///
/// ```rust
/// use aquarium_api::clients::RequestBody;
/// use reqwest::multipart::Form;
/// use serde_json::json;
///
/// let body = RequestBody::from(json!({"name": "Shot 010"}));
/// assert!(!body.is_opaque());
///
/// let upload = RequestBody::from(Form::new().text("name", "preview.png"));
/// assert!(upload.is_opaque());
/// ```
#[derive(Debug)]
pub enum RequestBody {
    /// A JSON document.
    Json(Value),
    /// A multipart form, typically a file upload.
    Multipart(reqwest::multipart::Form),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl RequestBody {
    /// Serializes any value into a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the serialization error if `value` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self::Json)
    }

    /// Returns `true` for bodies that are passed through without a forced
    /// content type.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        !matches!(self, Self::Json(_))
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<reqwest::multipart::Form> for RequestBody {
    fn from(form: reqwest::multipart::Form) -> Self {
        Self::Multipart(form)
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// An HTTP request to be sent to the Aquarium API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use aquarium_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// // GET request
/// let get_request = HttpRequest::builder(HttpMethod::Get, "items/123456")
///     .query_param("populate", true)
///     .build()
///     .unwrap();
///
/// // PATCH request with JSON body
/// let patch_request = HttpRequest::builder(HttpMethod::Patch, "items/123456")
///     .body(json!({"data": {"name": "Renamed"}}))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the versioned base URL) for this request.
    pub path: String,
    /// Query parameters to append to the URL.
    pub query: Option<QueryParams>,
    /// The request body, if any.
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::BodyNotAllowed`] if a body is set on
    /// a method that does not take one.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && !self.http_method.allows_body() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Option<QueryParams>,
    body: Option<RequestBody>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and path.
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the request body from an optional value.
    #[must_use]
    pub fn maybe_body(mut self, body: Option<RequestBody>) -> Self {
        self.body = body;
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = Some(query);
        self
    }

    /// Sets all query parameters from an optional value.
    #[must_use]
    pub fn maybe_query(mut self, query: Option<QueryParams>) -> Self {
        self.query = query;
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query
            .get_or_insert_with(QueryParams::new)
            .append(key, value);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}

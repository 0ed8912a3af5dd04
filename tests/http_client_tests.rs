//! Integration tests for the request dispatcher.
//!
//! These tests run the HTTP client against a local mock server and verify
//! the URL, headers and body of what goes over the wire, as well as how
//! responses are turned into results.

use std::io::{Read, Write};
use std::sync::Arc;

use aquarium_api::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, QueryParams, RequestBody, JSON_CONTENT_TYPE,
};
use aquarium_api::{AccessToken, ApiVersion, BaseUrl, Session, TenantDomain};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client for the mock server with the given token and domain.
fn create_client(server: &MockServer, token: Option<&str>, domain: Option<&str>) -> HttpClient {
    let session = Session::new(
        BaseUrl::new(&server.uri()).unwrap(),
        ApiVersion::V1,
        token.map(|t| AccessToken::new(t).unwrap()),
        domain.map(|d| TenantDomain::new(d).unwrap()),
    )
    .unwrap();
    HttpClient::new(Arc::new(session), None).unwrap()
}

fn get(path: &str) -> HttpRequest {
    HttpRequest::builder(HttpMethod::Get, path).build().unwrap()
}

/// Mounts a 200 `{}` response for any request and returns the server.
async fn ok_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    server
}

async fn single_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

// ============================================================================
// Headers
// ============================================================================

#[tokio::test]
async fn test_headers_without_token_or_domain() {
    let server = ok_server().await;
    let client = create_client(&server, None, None);

    client.request(get("items")).await.unwrap();

    let request = single_request(&server).await;
    assert!(request.headers.get("authorization").is_none());
    assert!(request.headers.get("aquarium-domain").is_none());
    assert_eq!(request.headers.get("content-type").unwrap(), JSON_CONTENT_TYPE);
}

#[tokio::test]
async fn test_headers_with_token_only() {
    let server = ok_server().await;
    let client = create_client(&server, Some("T0"), None);

    client.request(get("items")).await.unwrap();

    let request = single_request(&server).await;
    assert_eq!(request.headers.get("authorization").unwrap(), "T0");
    assert!(request.headers.get("aquarium-domain").is_none());
}

#[tokio::test]
async fn test_headers_with_domain_only() {
    let server = ok_server().await;
    let client = create_client(&server, None, Some("studio"));

    client.request(get("items")).await.unwrap();

    let request = single_request(&server).await;
    assert!(request.headers.get("authorization").is_none());
    assert_eq!(request.headers.get("aquarium-domain").unwrap(), "studio");
}

#[tokio::test]
async fn test_headers_with_token_and_domain() {
    let server = ok_server().await;
    let client = create_client(&server, Some("T0"), Some("studio"));

    client.request(get("items")).await.unwrap();

    let request = single_request(&server).await;
    assert_eq!(request.headers.get("authorization").unwrap(), "T0");
    assert_eq!(request.headers.get("aquarium-domain").unwrap(), "studio");
    let user_agent = request.headers.get("user-agent").unwrap().to_str().unwrap();
    assert!(user_agent.contains("Aquarium API Library v"));
}

#[tokio::test]
async fn test_session_changes_apply_to_next_request() {
    let server = ok_server().await;
    let client = create_client(&server, None, None);

    client.session().set_token(AccessToken::new("T2").unwrap());
    client.request(get("items")).await.unwrap();
    client.session().clear_token();
    client.request(get("items")).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers.get("authorization").unwrap(), "T2");
    assert!(requests[1].headers.get("authorization").is_none());
}

// ============================================================================
// URL and query
// ============================================================================

#[tokio::test]
async fn test_path_resolves_under_versioned_base() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/items/123456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_key": "123456"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, None, None);
    let value = client.request(get("items/123456")).await.unwrap();

    assert_eq!(value, json!({"_key": "123456"}));
}

#[tokio::test]
async fn test_query_entries_keep_order_and_repeats() {
    let server = ok_server().await;
    let client = create_client(&server, None, None);

    let query = QueryParams::new()
        .with("type", "Shot")
        .with("type", "Asset")
        .with("limit", 10)
        .with("populate", true);
    let request = HttpRequest::builder(HttpMethod::Get, "items")
        .query(query)
        .build()
        .unwrap();
    client.request(request).await.unwrap();

    let request = single_request(&server).await;
    assert_eq!(request.url.path(), "/v1/items");
    assert_eq!(
        request.url.query(),
        Some("type=Shot&type=Asset&limit=10&populate=true")
    );
}

#[tokio::test]
async fn test_empty_query_adds_no_question_mark() {
    let server = ok_server().await;
    let client = create_client(&server, None, None);

    let request = HttpRequest::builder(HttpMethod::Get, "items")
        .query(QueryParams::new())
        .build()
        .unwrap();
    client.request(request).await.unwrap();

    let request = single_request(&server).await;
    assert_eq!(request.url.query(), None);
}

// ============================================================================
// Bodies
// ============================================================================

#[tokio::test]
async fn test_json_body_is_sent_with_json_content_type() {
    let server = ok_server().await;
    let client = create_client(&server, None, None);

    let body = json!({"type": "Shot", "data": {"name": "sh010", "frames": [1, 2]}});
    let request = HttpRequest::builder(HttpMethod::Post, "items")
        .body(body.clone())
        .build()
        .unwrap();
    client.request(request).await.unwrap();

    let request = single_request(&server).await;
    assert_eq!(request.method.as_str(), "POST");
    assert_eq!(request.headers.get("content-type").unwrap(), JSON_CONTENT_TYPE);
    assert_eq!(request.body_json::<serde_json::Value>().unwrap(), body);
}

#[tokio::test]
async fn test_multipart_body_keeps_its_own_content_type() {
    let server = ok_server().await;
    let client = create_client(&server, Some("T0"), None);

    let form = reqwest::multipart::Form::new()
        .text("name", "thumbnail")
        .part(
            "file",
            reqwest::multipart::Part::bytes(b"PNGDATA".to_vec()).file_name("thumb.png"),
        );
    let request = HttpRequest::builder(HttpMethod::Post, "attachments")
        .body(RequestBody::from(form))
        .build()
        .unwrap();
    client.request(request).await.unwrap();

    let request = single_request(&server).await;
    let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    assert!(content_type.contains("boundary="));
    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("thumbnail"));
    assert!(body.contains("PNGDATA"));
    assert_eq!(request.headers.get("authorization").unwrap(), "T0");
}

#[tokio::test]
async fn test_bytes_body_is_passed_through() {
    let server = ok_server().await;
    let client = create_client(&server, None, None);

    let request = HttpRequest::builder(HttpMethod::Put, "attachments/9/content")
        .body(b"raw bytes".to_vec())
        .build()
        .unwrap();
    client.request(request).await.unwrap();

    let request = single_request(&server).await;
    assert!(request.headers.get("content-type").is_none());
    assert_eq!(request.body, b"raw bytes");
}

#[tokio::test]
async fn test_get_with_body_is_rejected_before_sending() {
    let server = ok_server().await;
    let client = create_client(&server, None, None);

    let request = HttpRequest {
        http_method: HttpMethod::Get,
        path: "items".to_string(),
        query: None,
        body: Some(json!({"a": 1}).into()),
    };
    let result = client.request(request).await;

    assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Responses
// ============================================================================

#[tokio::test]
async fn test_non_success_returns_raw_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/items/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = create_client(&server, None, None);
    let error = client.request(get("items/missing")).await.unwrap_err();

    assert_eq!(error.to_string(), "not found");
    assert_eq!(error.status(), Some(404));
    match error {
        HttpError::Response(response) => {
            assert_eq!(response.code, 404);
            assert_eq!(response.message, "not found");
        }
        other => panic!("Expected Response error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_success_json_body_is_not_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"bad"}"#))
        .mount(&server)
        .await;

    let client = create_client(&server, None, None);
    let request = HttpRequest::builder(HttpMethod::Post, "items")
        .body(json!({}))
        .build()
        .unwrap();
    let error = client.request(request).await.unwrap_err();

    assert_eq!(error.to_string(), r#"{"error":"bad"}"#);
}

#[tokio::test]
async fn test_no_content_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_client(&server, None, None);
    let request = HttpRequest::builder(HttpMethod::Delete, "items/1")
        .build()
        .unwrap();

    assert_eq!(client.request(request).await.unwrap(), serde_json::Value::Null);
}

#[tokio::test]
async fn test_empty_ok_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = create_client(&server, None, None);
    let result = client.request(get("items")).await;

    assert!(matches!(result, Err(HttpError::Decode { code: 200, .. })));
}

#[tokio::test]
async fn test_truncated_error_body_is_body_read_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    // Answers one request with a 500 whose body is shorter than announced.
    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 1024];
        while !received.windows(4).any(|window| window == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\nshort")
            .unwrap();
        stream.flush().unwrap();
        stream.shutdown(std::net::Shutdown::Both).ok();
    });

    let session = Session::new(
        BaseUrl::new(format!("http://127.0.0.1:{port}")).unwrap(),
        ApiVersion::V1,
        None,
        None,
    )
    .unwrap();
    let client = HttpClient::new(Arc::new(session), None).unwrap();

    let error = client.request(get("items")).await.unwrap_err();
    server.join().unwrap();

    assert!(matches!(error, HttpError::BodyRead(_)));
    assert_eq!(error.to_string(), "error during fetch");
    assert_eq!(error.status(), Some(500));
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let client = create_client(&server, None, None);
    let result = client.request(get("items")).await;

    assert!(matches!(result, Err(HttpError::Decode { code: 200, .. })));
}

#[tokio::test]
async fn test_each_request_is_a_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_key": "42"})))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_client(&server, None, None);
    let first = client.request(get("users/me")).await.unwrap();
    let second = client.request(get("users/me")).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let session = Session::new(
        BaseUrl::new(&format!("http://127.0.0.1:{port}")).unwrap(),
        ApiVersion::V1,
        None,
        None,
    )
    .unwrap();
    let client = HttpClient::new(Arc::new(session), None).unwrap();

    let result = client.request(get("items")).await;

    assert!(matches!(result, Err(HttpError::Network(_))));
    assert_eq!(result.unwrap_err().status(), None);
}

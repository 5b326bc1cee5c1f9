//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use crate::types::{BackoffType, Method};
use std::collections::HashMap;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 3);
    assert!(config.base_url.is_none());
    assert!(config.rate_limit.is_some());
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.socket.dev")
        .timeout(Duration::from_secs(60))
        .max_retries(5)
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(200),
            Duration::from_secs(30),
        )
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.socket.dev".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.backoff_type, BackoffType::Linear);
    assert_eq!(config.initial_backoff, Duration::from_millis(200));
    assert_eq!(config.max_backoff, Duration::from_secs(30));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_config_from_tap_config() {
    let tap = crate::config::TapConfig::from_json(
        r#"{"api_key": "k", "timeout_secs": 12, "max_retries": 7, "rate_limit_rps": 3}"#,
    )
    .unwrap();
    let config = HttpClientConfig::from_tap_config(&tap);
    assert_eq!(config.base_url, Some(crate::config::DEFAULT_BASE_URL.to_string()));
    assert_eq!(config.timeout, Duration::from_secs(12));
    assert_eq!(config.max_retries, 7);
    assert_eq!(config.rate_limit.as_ref().unwrap().requests_per_second, 3);
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("page", "1")
        .header("X-Request-Id", "abc123")
        .timeout(Duration::from_secs(10))
        .retries(2);

    assert_eq!(config.query.get("page"), Some(&"1".to_string()));
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    assert_eq!(config.max_retries, Some(2));
}

#[test]
fn test_calculate_backoff() {
    let config = HttpClientConfig::builder()
        .backoff(
            BackoffType::Exponential,
            Duration::from_millis(100),
            Duration::from_secs(1),
        )
        .no_rate_limit()
        .build();
    let client = HttpClient::with_config(config);
    assert!(!client.has_rate_limiter());

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(400));
    // Capped at max_backoff
    assert_eq!(client.calculate_backoff(10), Duration::from_secs(1));
}

#[tokio::test]
async fn test_http_client_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/report/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "r1", "url": "https://socket.dev/reports/r1"}
        ])))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config);
    let data = client.get_json("/v0/report/list").await.unwrap();

    assert_eq!(data[0]["id"], "r1");
}

#[tokio::test]
async fn test_http_client_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/organizations"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "organizations": {}
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config);
    let response = client
        .get_with_config(
            "/v0/organizations",
            RequestConfig::new().query("per_page", "50"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_applies_auth() {
    let mock_server = MockServer::start().await;

    // base64("sk_live:") == "c2tfbGl2ZTo="
    Mock::given(method("GET"))
        .and(path("/v0/organizations"))
        .and(header("Authorization", "Basic c2tfbGl2ZTo="))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "organizations": {}
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .no_rate_limit()
        .build();
    let client = HttpClient::with_auth(config, AuthConfig::socketdev("sk_live"));

    let response = client.get("/v0/organizations").await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_retry_on_server_error_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(3)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(1),
            Duration::from_millis(1),
        )
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config);
    let data = client.get_json("/flaky").await.unwrap();
    assert_eq!(data["ok"], true);
}

#[tokio::test]
async fn test_client_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/organizations"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(3)
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config);
    let err = client.get("/v0/organizations").await.unwrap_err();

    match err {
        crate::error::Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Unauthorized");
        }
        other => panic!("Expected HttpStatus error, got: {other}"),
    }
}

#[tokio::test]
async fn test_server_error_exhausts_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(1)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(1),
            Duration::from_millis(1),
        )
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config);
    let err = client.get("/broken").await.unwrap_err();
    assert!(matches!(
        err,
        crate::error::Error::HttpStatus { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_request_executor_seam() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/orgs/acme/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "repositories": {}
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .no_rate_limit()
        .build();
    let client = HttpClient::with_config(config);

    let executor: &dyn RequestExecutor = &client;
    let body = executor
        .execute(Method::GET, "/v0/orgs/acme/repos", &HashMap::new())
        .await
        .unwrap();
    assert!(body["repositories"].is_object());
}

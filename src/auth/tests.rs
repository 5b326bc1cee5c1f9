//! Tests for the authentication module

use super::*;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn send_authed(server: &MockServer, auth: AuthConfig, target: &str) -> reqwest::Response {
    let client = reqwest::Client::new();
    let req = client.get(format!("{}{}", server.uri(), target));
    let authenticator = Authenticator::new(auth);
    authenticator.apply(req).send().await.unwrap()
}

#[tokio::test]
async fn test_none_adds_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let response = send_authed(&server, AuthConfig::None, "/open").await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_api_key_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secure"))
        .and(header("X-Api-Key", "secret123"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let auth = AuthConfig::ApiKey {
        location: Location::Header,
        header_name: Some("X-Api-Key".to_string()),
        query_param: None,
        prefix: None,
        value: "secret123".to_string(),
    };
    let response = send_authed(&server, auth, "/secure").await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_api_key_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secure"))
        .and(query_param("token", "secret123"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let auth = AuthConfig::ApiKey {
        location: Location::Query,
        header_name: None,
        query_param: Some("token".to_string()),
        prefix: None,
        value: "secret123".to_string(),
    };
    let response = send_authed(&server, auth, "/secure").await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_basic_auth_header_encoding() {
    let server = MockServer::start().await;

    // base64("sk_test:") == "c2tfdGVzdDo="
    Mock::given(method("GET"))
        .and(path("/v0/organizations"))
        .and(header("Authorization", "Basic c2tfdGVzdDo="))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let response = send_authed(
        &server,
        AuthConfig::socketdev("sk_test"),
        "/v0/organizations",
    )
    .await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_bearer_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secure"))
        .and(header("Authorization", "Bearer tok_abc"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let auth = AuthConfig::Bearer {
        token: "tok_abc".to_string(),
    };
    let response = send_authed(&server, auth, "/secure").await;
    assert_eq!(response.status(), 200);
}

//! User service client against a wiremock server

use hd_client::{ClientError, RetryConfig, ServiceClient, UserServiceClient};

use std::time::Duration;

use googletest::prelude::*;
use serde_json::json;
use uuid::Uuid;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

const USER_ID: &str = "7b0e9c3a-54f2-4f57-9d4c-2f5a1f1f9a10";

fn fast_retry(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        initial_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
        backoff_multiplier: 2.0,
        jitter: false,
    }
}

fn user_client(server: &MockServer, timeout: Duration, retry: RetryConfig) -> UserServiceClient {
    UserServiceClient::new(ServiceClient::new(&server.uri(), timeout, retry).unwrap())
}

fn user_body() -> serde_json::Value {
    json!({
        "id": USER_ID,
        "employee_code": "E1",
        "email": "jane@x.com",
        "first_name": "Jane",
        "last_name": "Doe",
        "role": "agent",
        "is_active": true
    })
}

#[tokio::test]
async fn given_existing_user_when_fetched_then_user_is_decoded_and_token_forwarded() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/users/{}", USER_ID)))
        .and(header("Authorization", "Bearer caller-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .expect(1)
        .mount(&server)
        .await;
    let client = user_client(&server, Duration::from_secs(5), fast_retry(1));

    // When
    let user = client
        .get_user(Uuid::parse_str(USER_ID).unwrap(), Some("caller-token"))
        .await
        .unwrap();

    // Then
    assert_that!(user.email, eq("jane@x.com"));
    assert_eq!(user.employee_code.as_deref(), Some("E1"));
    assert_eq!(user.role.as_deref(), Some("agent"));
}

#[tokio::test]
async fn given_missing_user_when_fetched_then_not_found_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/users/{}", USER_ID)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .expect(1)
        .mount(&server)
        .await;
    let client = user_client(&server, Duration::from_secs(5), fast_retry(4));

    let result = client.get_user(Uuid::parse_str(USER_ID).unwrap(), None).await;

    let err = result.unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");
}

#[tokio::test]
async fn given_missing_user_when_found_then_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = user_client(&server, Duration::from_secs(5), fast_retry(1));

    let result = client
        .find_user(Uuid::parse_str(USER_ID).unwrap(), None)
        .await
        .unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_slow_service_when_fetched_then_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(user_body())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;
    let client = user_client(&server, Duration::from_millis(50), fast_retry(1));

    let result = client.get_user(Uuid::parse_str(USER_ID).unwrap(), None).await;

    let err = result.unwrap_err();
    assert!(matches!(err, ClientError::Timeout { .. }), "unexpected error: {err}");
}

#[tokio::test]
async fn given_unavailable_service_when_fetched_then_retried_until_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {"code": "UNAVAILABLE", "message": "try later"}
        })))
        .expect(3)
        .mount(&server)
        .await;
    let client = user_client(&server, Duration::from_secs(5), fast_retry(3));

    let result = client.get_user(Uuid::parse_str(USER_ID).unwrap(), None).await;

    match result.unwrap_err() {
        ClientError::Api { status, code, .. } => {
            assert_eq!(status, 503);
            assert_eq!(code, "UNAVAILABLE");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn given_bad_request_when_fetched_then_api_error_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;
    let client = user_client(&server, Duration::from_secs(5), fast_retry(3));

    let result = client.get_user(Uuid::parse_str(USER_ID).unwrap(), None).await;

    assert!(matches!(result.unwrap_err(), ClientError::Api { status: 400, .. }));
}

#[tokio::test]
async fn given_invalid_body_when_fetched_then_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    let client = user_client(&server, Duration::from_secs(5), fast_retry(1));

    let result = client.get_user(Uuid::parse_str(USER_ID).unwrap(), None).await;

    assert!(matches!(result.unwrap_err(), ClientError::Decode { .. }));
}

#[tokio::test]
async fn given_unreachable_service_when_fetched_then_transport_error() {
    let client = UserServiceClient::new(
        ServiceClient::new("http://127.0.0.1:9", Duration::from_secs(2), fast_retry(1)).unwrap(),
    );

    let result = client.get_user(Uuid::parse_str(USER_ID).unwrap(), None).await;

    let err = result.unwrap_err();
    assert!(
        matches!(err, ClientError::Transport { .. } | ClientError::Timeout { .. }),
        "unexpected error: {err}"
    );
    assert!(err.is_retryable());
}

#[tokio::test]
async fn given_default_token_when_caller_has_none_then_default_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("Authorization", "Bearer service-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .expect(1)
        .mount(&server)
        .await;
    let service = ServiceClient::new(&server.uri(), Duration::from_secs(5), fast_retry(1))
        .unwrap()
        .with_default_token(Some(String::from("service-token")));
    let client = UserServiceClient::new(service);

    let exists = client
        .user_exists(Uuid::parse_str(USER_ID).unwrap(), None)
        .await
        .unwrap();

    assert!(exists);
}

#[test]
fn given_trailing_slash_when_constructed_then_base_url_is_trimmed() {
    let client =
        ServiceClient::new("http://localhost:8001/", Duration::from_secs(1), RetryConfig::none())
            .unwrap();

    assert_eq!(client.base_url(), "http://localhost:8001");
}

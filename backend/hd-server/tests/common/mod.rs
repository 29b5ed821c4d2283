#![allow(dead_code)]

//! Test infrastructure for hd-server API tests

use hd_auth::{JwtValidator, TokenClaims};
use hd_client::{RetryConfig, ServiceClient, UserServiceClient};
use hd_server::{ServerState, build_router};
use hd_ws::{ConnectionConfig, ShutdownCoordinator};

use std::time::Duration;

use axum_test::TestServer;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use uuid::Uuid;
use wiremock::MockServer;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-server-tests-32b";

/// User-service calls give up after this long
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_millis(300);

pub struct TestApp {
    pub server: TestServer,
    pub state: ServerState,
    pub user_service: MockServer,
}

pub async fn create_test_app() -> TestApp {
    let user_service = MockServer::start().await;
    let pool = hd_db::connect_in_memory().await.unwrap();
    let client = ServiceClient::new(&user_service.uri(), UPSTREAM_TIMEOUT, RetryConfig::none())
        .unwrap();

    let state = ServerState::new(
        pool,
        UserServiceClient::new(client),
        JwtValidator::with_hs256(TEST_SECRET),
        ConnectionConfig::default(),
        100,
        ShutdownCoordinator::new(),
    );

    let server = TestServer::builder()
        .http_transport()
        .build(build_router(state.clone(), 100))
        .expect("Failed to create test server");

    TestApp {
        server,
        state,
        user_service,
    }
}

pub fn claims_for(user_id: Uuid, email: &str) -> TokenClaims {
    TokenClaims {
        user_id: Some(Value::String(user_id.to_string())),
        exp: Utc::now().timestamp() + 3600,
        iat: Some(Utc::now().timestamp()),
        employee_code: Some("E1".to_string()),
        full_name: Some("Jane Doe".to_string()),
        email: Some(email.to_string()),
        role: Some("requestor".to_string()),
        ..Default::default()
    }
}

pub fn sign(claims: &TokenClaims) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

pub fn token_for(user_id: Uuid, email: &str) -> String {
    sign(&claims_for(user_id, email))
}

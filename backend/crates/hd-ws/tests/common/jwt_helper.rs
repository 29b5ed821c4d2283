#![allow(dead_code)]

use hd_auth::TokenClaims;

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use uuid::Uuid;

/// HS256 requires at least 32 bytes
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-integration-tests-min-32-bytes-long";

pub fn create_test_token(user_id: Uuid, email: &str) -> String {
    create_token_expiring_in(user_id, email, 3600)
}

pub fn create_expired_token(user_id: Uuid, email: &str) -> String {
    create_token_expiring_in(user_id, email, -3600)
}

fn create_token_expiring_in(user_id: Uuid, email: &str, ttl_secs: i64) -> String {
    let claims = TokenClaims {
        user_id: Some(Value::String(user_id.to_string())),
        exp: Utc::now().timestamp() + ttl_secs,
        iat: Some(Utc::now().timestamp()),
        employee_code: Some("E100".to_string()),
        full_name: Some("Grace Hopper".to_string()),
        email: Some(email.to_string()),
        role: Some("agent".to_string()),
        ..Default::default()
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .unwrap()
}

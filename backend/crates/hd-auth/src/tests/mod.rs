
use crate::TokenClaims;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::Value;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub(crate) const TEST_USER_ID: &str = "7b0e9c3a-54f2-4f57-9d4c-2f5a1f1f9a10";

pub(crate) fn create_test_token(claims: &TokenClaims, secret: &[u8]) -> String {
    create_test_token_with_algorithm(claims, secret, Algorithm::HS256)
}

pub(crate) fn create_test_token_with_algorithm(
    claims: &TokenClaims,
    secret: &[u8],
    algorithm: Algorithm,
) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

pub(crate) fn valid_claims() -> TokenClaims {
    TokenClaims {
        user_id: Some(Value::String(TEST_USER_ID.to_string())),
        exp: Utc::now().timestamp() + 3600,
        iat: Some(Utc::now().timestamp()),
        employee_code: Some("E1".to_string()),
        full_name: Some("Jane Doe".to_string()),
        email: Some("jane@x.com".to_string()),
        role: Some("requestor".to_string()),
        ..Default::default()
    }
}

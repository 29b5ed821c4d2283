#![allow(dead_code)]

use hd_auth::{JwtValidator, TokenClaims};
use hd_db::{IdentityReplicaRepository, SqlitePool};
use hd_identity::{Authenticator, IdentityResolver};

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use tempfile::TempDir;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub fn create_test_token(claims: &TokenClaims) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
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

pub struct TestIdentity {
    pub authenticator: Authenticator,
    pub repository: IdentityReplicaRepository,
    _dir: Option<TempDir>,
}

fn build(pool: SqlitePool, dir: Option<TempDir>) -> TestIdentity {
    let repository = IdentityReplicaRepository::new(pool);
    let resolver = IdentityResolver::new(Arc::new(repository.clone()));
    let authenticator = Authenticator::new(JwtValidator::with_hs256(TEST_SECRET), resolver);

    TestIdentity {
        authenticator,
        repository,
        _dir: dir,
    }
}

pub async fn create_test_identity() -> TestIdentity {
    let pool = hd_db::connect_in_memory().await.unwrap();
    build(pool, None)
}

/// File-backed database with several connections for race tests
pub async fn create_shared_identity(max_connections: u32) -> TestIdentity {
    let dir = TempDir::new().unwrap();
    let pool = hd_db::connect(&dir.path().join("replicas.db"), max_connections)
        .await
        .unwrap();
    build(pool, Some(dir))
}

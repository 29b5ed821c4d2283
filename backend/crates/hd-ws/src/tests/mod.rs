
use hd_auth::{JwtValidator, TokenClaims};
use hd_core::Principal;
use hd_db::{IdentityReplicaRepository, ReplicaStore};
use hd_identity::{Authenticator, IdentityResolver};

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use uuid::Uuid;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn authenticator_with(store: Arc<dyn ReplicaStore>) -> Authenticator {
    Authenticator::new(
        JwtValidator::with_hs256(TEST_SECRET),
        IdentityResolver::new(store),
    )
}

pub(crate) async fn test_authenticator() -> Authenticator {
    let pool = hd_db::connect_in_memory().await.unwrap();
    authenticator_with(Arc::new(IdentityReplicaRepository::new(pool)))
}

/// Signed token for `id` expiring `ttl_secs` from now (negative for expired)
pub(crate) fn token_for(id: Uuid, ttl_secs: i64) -> String {
    let claims = TokenClaims {
        user_id: Some(Value::String(id.to_string())),
        exp: Utc::now().timestamp() + ttl_secs,
        employee_code: Some("E7".to_string()),
        full_name: Some("Ada Lovelace".to_string()),
        email: Some("ada@example.com".to_string()),
        role: Some("agent".to_string()),
        ..Default::default()
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(TEST_SECRET)).unwrap()
}

pub(crate) fn test_principal() -> Principal {
    Principal {
        id: Uuid::new_v4(),
        employee_code: "E7".to_string(),
        email: "ada@example.com".to_string(),
        role: "agent".to_string(),
        is_active: true,
    }
}

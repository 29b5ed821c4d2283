#![allow(dead_code)]

use super::jwt_helper::TEST_JWT_SECRET;

use hd_auth::JwtValidator;
use hd_db::IdentityReplicaRepository;
use hd_identity::{Authenticator, IdentityResolver};
use hd_ws::{AppState, ConnectionConfig, ShutdownCoordinator};

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, routing::get};
use axum_test::TestServer;

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
    pub repository: IdentityReplicaRepository,
}

impl TestServerWithState {
    /// Poll until the registry holds `expected` connections
    pub async fn wait_for_connections(&self, expected: usize) -> bool {
        for _ in 0..50 {
            if self.app_state.registry.total_count().await == expected {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        false
    }
}

pub async fn create_test_server() -> TestServerWithState {
    create_test_server_with_limit(100).await
}

pub async fn create_test_server_with_limit(max_connections: usize) -> TestServerWithState {
    let pool = hd_db::connect_in_memory().await.unwrap();
    let repository = IdentityReplicaRepository::new(pool);
    let authenticator = Authenticator::new(
        JwtValidator::with_hs256(TEST_JWT_SECRET),
        IdentityResolver::new(Arc::new(repository.clone())),
    );

    let app_state = AppState::new(
        authenticator,
        ConnectionConfig::default(),
        max_connections,
        ShutdownCoordinator::new(),
    );

    let router = Router::new()
        .route("/ws", get(hd_ws::handler))
        .with_state(app_state.clone());

    let server = TestServer::builder()
        .http_transport()
        .build(router)
        .expect("Failed to create test server");

    TestServerWithState {
        server,
        app_state,
        repository,
    }
}

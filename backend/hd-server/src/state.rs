use hd_auth::JwtValidator;
use hd_client::UserServiceClient;
use hd_db::{IdentityReplicaRepository, SqlitePool};
use hd_identity::{Authenticator, IdentityResolver};
use hd_ws::{ConnectionConfig, ShutdownCoordinator};

use std::sync::Arc;

use axum::extract::FromRef;

/// State shared by every HTTP handler and the streaming endpoint
#[derive(Clone)]
pub struct ServerState {
    pub pool: SqlitePool,
    pub authenticator: Authenticator,
    pub replicas: IdentityReplicaRepository,
    pub users: UserServiceClient,
    pub ws: hd_ws::AppState,
}

impl ServerState {
    /// Wire the replica store, resolver and authenticator around `pool`.
    ///
    /// Both transports share one authenticator so they resolve identities identically.
    pub fn new(
        pool: SqlitePool,
        users: UserServiceClient,
        validator: JwtValidator,
        ws_config: ConnectionConfig,
        max_connections: usize,
        shutdown: ShutdownCoordinator,
    ) -> Self {
        let replicas = IdentityReplicaRepository::new(pool.clone());
        let resolver = IdentityResolver::new(Arc::new(replicas.clone()));
        let authenticator = Authenticator::new(validator, resolver);
        let ws = hd_ws::AppState::new(authenticator.clone(), ws_config, max_connections, shutdown);

        Self {
            pool,
            authenticator,
            replicas,
            users,
            ws,
        }
    }
}

impl FromRef<ServerState> for hd_ws::AppState {
    fn from_ref(state: &ServerState) -> Self {
        state.ws.clone()
    }
}

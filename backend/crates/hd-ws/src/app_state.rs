use crate::{
    ConnectionAuth, ConnectionConfig, ConnectionRegistry, Metrics, Registration,
    ShutdownCoordinator, WebSocketConnection,
};

use hd_identity::Authenticator;

use axum::{
    extract::{
        Query, State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::Response,
};
use log::{error, info, warn};
use serde::Deserialize;

/// Shared application state for streaming handlers
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Authenticator,
    pub registry: ConnectionRegistry,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

impl AppState {
    pub fn new(
        authenticator: Authenticator,
        config: ConnectionConfig,
        max_connections: usize,
        shutdown: ShutdownCoordinator,
    ) -> Self {
        Self {
            authenticator,
            registry: ConnectionRegistry::new(max_connections),
            metrics: Metrics::new(),
            shutdown,
            config,
        }
    }
}

/// Query string of the upgrade request
#[derive(Debug, Default, Deserialize)]
pub struct HandshakeParams {
    pub token: Option<String>,
}

/// Upgrade handler. The handshake finishes before the upgrade so the
/// connection starts with its principal (or anonymity) already fixed.
pub async fn handler(
    State(state): State<AppState>,
    Query(params): Query<HandshakeParams>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    let auth = ConnectionAuth::handshake(
        &state.authenticator,
        params.token.as_deref(),
        state.config.handshake_timeout(),
    )
    .await;
    state.metrics.handshake_completed(auth.state());

    let registration = state.registry.register_scoped(&auth).await.map_err(|e| {
        error!("Failed to register connection: {}", e);
        StatusCode::SERVICE_UNAVAILABLE
    })?;
    let connection_id = registration.connection_id();

    info!("Upgrading connection {} ({})", connection_id, auth.state());

    // A failed upgrade drops the callback, and the registration with it
    Ok(ws
        .on_failed_upgrade(move |e| warn!("Upgrade of connection {connection_id} failed: {e}"))
        .on_upgrade(move |socket| handle_socket(socket, registration, auth, state)))
}

async fn handle_socket(
    socket: WebSocket,
    registration: Registration,
    auth: ConnectionAuth,
    state: AppState,
) {
    let connection_id = registration.connection_id();
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection =
        WebSocketConnection::new(connection_id, auth, state.config.clone(), state.metrics.clone());

    let result = connection.handle(socket, shutdown_guard).await;

    drop(registration);

    if let Err(e) = result {
        error!("Connection {connection_id} error: {e}");
    }
}

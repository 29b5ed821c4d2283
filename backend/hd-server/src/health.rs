use crate::ServerState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /health - Component status snapshot
pub async fn health(State(state): State<ServerState>) -> Response {
    let database_up = hd_db::ping(&state.pool).await.is_ok();

    let health = json!({
        "status": if database_up { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if database_up { "up" } else { "down" },
            "websocket": {
                "connections": state.ws.registry.total_count().await,
                "authenticated": state.ws.registry.authenticated_count().await,
            },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness check
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness check; the replica database must answer
pub async fn readiness(State(state): State<ServerState>) -> Response {
    match hd_db::ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
        }
    }
}

use crate::{ServerState, api, authenticate_request, health};

use axum::{Router, middleware::from_fn_with_state, routing::get};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: ServerState, max_in_flight: usize) -> Router {
    let authenticated = Router::new()
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/api/v1/me", get(api::me::get_me))
        .route("/api/v1/users/{id}", get(api::users::users::get_user))
        .layer(from_fn_with_state(state.clone(), authenticate_request));

    // Streaming authenticates from its query token during the handshake only
    let streaming = Router::new().route("/ws", get(hd_ws::handler));

    authenticated
        .merge(streaming)
        .with_state(state)
        .layer(GlobalConcurrencyLimitLayer::new(max_in_flight))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

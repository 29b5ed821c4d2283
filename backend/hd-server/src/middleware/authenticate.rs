use crate::ServerState;

use hd_auth::{AuthError, bearer_token};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use log::debug;

/// Attach a [`hd_core::Principal`] to the request when the bearer token resolves.
///
/// Never rejects: handlers decide whether a principal is required.
pub async fn authenticate_request(
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match bearer_token(request.headers()) {
        Ok(token) => Some(token.to_owned()),
        Err(AuthError::MissingHeader { .. }) => None,
        Err(e) => {
            debug!("Ignoring Authorization header [{}]: {}", e.error_code(), e);
            None
        }
    };

    if let Some(token) = token
        && let Some(principal) = state.authenticator.authenticate_soft(&token).await
    {
        request.extensions_mut().insert(principal);
    }

    next.run(request).await
}

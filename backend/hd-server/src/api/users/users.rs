use crate::{ApiResult, CurrentPrincipal, ServerState, UserResponse};

use hd_auth::bearer_token;
use hd_db::ReplicaStore;

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use log::debug;
use uuid::Uuid;

/// GET /api/v1/users/{id}
///
/// Serves the local replica when one exists, otherwise asks the user service
/// with the caller's own bearer token.
pub async fn get_user(
    State(state): State<ServerState>,
    CurrentPrincipal(caller): CurrentPrincipal,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<UserResponse>> {
    if let Some(replica) = state.replicas.find_by_id(id).await? {
        return Ok(Json(replica.into()));
    }

    debug!("User {} has no local replica, {} falls through to the user service", id, caller.id);

    let token = bearer_token(&headers).ok();
    let user = state.users.get_user(id, token).await?;

    Ok(Json(user.into()))
}

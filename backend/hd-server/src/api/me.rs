use crate::CurrentPrincipal;

use hd_core::Principal;

use axum::Json;

/// GET /api/v1/me
pub async fn get_me(CurrentPrincipal(principal): CurrentPrincipal) -> Json<Principal> {
    Json(principal)
}

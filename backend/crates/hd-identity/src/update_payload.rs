use hd_auth::ClaimSet;
use hd_core::ReplicaUpdate;

use log::warn;

/// Field set to write for `claims`.
///
/// Email and names are always written (empty when absent). `employee_code` and
/// `role` are only carried when the token supplied them.
pub fn update_from_claims(claims: &ClaimSet) -> ReplicaUpdate {
    let (first_name, last_name) = claims.name_parts();

    if claims.employee_code.is_none() {
        warn!(
            "Token for {} carries no employee code; keeping stored value",
            claims.user_id
        );
    }

    ReplicaUpdate {
        email: claims.email.clone().unwrap_or_default(),
        first_name,
        last_name,
        employee_code: claims.employee_code.clone(),
        role: claims.role.clone(),
        is_active: claims.is_active,
    }
}

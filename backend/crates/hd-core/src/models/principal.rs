use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated identity attached to a request or connection.
///
/// Domain handlers treat this as opaque; how it was resolved (fresh replica,
/// refreshed replica, degraded read) is not visible here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    /// Empty when the issuer never supplied one
    pub employee_code: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

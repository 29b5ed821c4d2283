use hd_client::RemoteUser;
use hd_core::IdentityReplica;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a user record was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserSource {
    Replica,
    UserService,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub employee_code: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
    pub is_active: bool,
    pub source: UserSource,
}

impl From<IdentityReplica> for UserResponse {
    fn from(replica: IdentityReplica) -> Self {
        Self {
            id: replica.id,
            employee_code: replica.employee_code,
            email: replica.email,
            first_name: replica.first_name,
            last_name: replica.last_name,
            role: Some(replica.role),
            is_active: replica.is_active,
            source: UserSource::Replica,
        }
    }
}

impl From<RemoteUser> for UserResponse {
    fn from(user: RemoteUser) -> Self {
        Self {
            id: user.id,
            employee_code: user.employee_code,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            is_active: user.is_active,
            source: UserSource::UserService,
        }
    }
}

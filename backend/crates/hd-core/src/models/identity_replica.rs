use crate::Principal;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Service-local copy of an identity issued by the central authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityReplica {
    /// Canonical user id from the issuer; never reassigned
    pub id: Uuid,
    pub employee_code: Option<String>,
    /// May differ from the issuer's email after a conflict rewrite
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub is_active: bool,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IdentityReplica {
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (_, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (false, false) => format!("{} {}", self.first_name, self.last_name),
        }
    }

    pub fn to_principal(&self) -> Principal {
        Principal {
            id: self.id,
            employee_code: self.employee_code.clone().unwrap_or_default(),
            email: self.email.clone(),
            role: self.role.clone(),
            is_active: self.is_active,
        }
    }

    /// Business fields only; audit timestamps are ignored.
    pub fn same_identity_as(&self, other: &IdentityReplica) -> bool {
        self.id == other.id
            && self.employee_code == other.employee_code
            && self.email == other.email
            && self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.role == other.role
            && self.is_active == other.is_active
    }
}

impl From<&IdentityReplica> for Principal {
    fn from(replica: &IdentityReplica) -> Self {
        replica.to_principal()
    }
}

use serde::{Deserialize, Serialize};

/// Field set written by a single replica upsert.
///
/// `employee_code` and `role` are `None` when the incoming claims did not carry a
/// usable value; the store must then keep whatever it already holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaUpdate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub employee_code: Option<String>,
    pub role: Option<String>,
    pub is_active: bool,
}

impl ReplicaUpdate {
    /// Namespace the email with the canonical id: `{id}_{email}`.
    pub fn with_namespaced_email(&self, id: &uuid::Uuid) -> Self {
        Self {
            email: format!("{}_{}", id, self.email),
            ..self.clone()
        }
    }
}

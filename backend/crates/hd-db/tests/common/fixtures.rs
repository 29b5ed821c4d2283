#![allow(dead_code)]

use hd_core::ReplicaUpdate;

/// Update carrying every optional field
pub fn full_update(email: &str) -> ReplicaUpdate {
    ReplicaUpdate {
        email: email.to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        employee_code: Some("E1".to_string()),
        role: Some("requestor".to_string()),
        is_active: true,
    }
}

/// Update with neither employee_code nor role
pub fn bare_update(email: &str) -> ReplicaUpdate {
    ReplicaUpdate {
        email: email.to_string(),
        first_name: "Jane".to_string(),
        last_name: "A. Doe".to_string(),
        employee_code: None,
        role: None,
        is_active: true,
    }
}

use crate::IdentityReplica;

use chrono::{Duration, Utc};
use uuid::Uuid;

fn replica() -> IdentityReplica {
    let now = Utc::now();
    IdentityReplica {
        id: Uuid::new_v4(),
        employee_code: Some("E1".to_string()),
        email: "jane@x.com".to_string(),
        first_name: "Jane".to_string(),
        last_name: "A. Doe".to_string(),
        role: "requestor".to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_full_name_joins_first_and_last() {
    assert_eq!(replica().full_name(), "Jane A. Doe");
}

#[test]
fn test_full_name_with_missing_last_name() {
    let mut replica = replica();
    replica.last_name.clear();
    assert_eq!(replica.full_name(), "Jane");
}

#[test]
fn test_to_principal_copies_identity_fields() {
    let replica = replica();
    let principal = replica.to_principal();

    assert_eq!(principal.id, replica.id);
    assert_eq!(principal.employee_code, "E1");
    assert_eq!(principal.email, "jane@x.com");
    assert_eq!(principal.role, "requestor");
    assert!(principal.is_active);
}

#[test]
fn test_to_principal_without_employee_code_is_empty_string() {
    let mut replica = replica();
    replica.employee_code = None;
    assert_eq!(replica.to_principal().employee_code, "");
}

#[test]
fn test_same_identity_ignores_updated_at() {
    let first = replica();
    let mut second = first.clone();
    second.updated_at = first.updated_at + Duration::seconds(30);

    assert!(first.same_identity_as(&second));

    second.role = "admin".to_string();
    assert!(!first.same_identity_as(&second));
}

#[test]
fn test_principal_serializes_flat() {
    let principal = replica().to_principal();
    let json = serde_json::to_value(&principal).unwrap();

    assert_eq!(json["email"], "jane@x.com");
    assert_eq!(json["is_active"], true);
    assert_eq!(json["id"], principal.id.to_string());
}

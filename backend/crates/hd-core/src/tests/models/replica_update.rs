use crate::ReplicaUpdate;

use uuid::Uuid;

#[test]
fn test_namespaced_email_prefixes_canonical_id() {
    let id = Uuid::parse_str("12345678-1234-1234-1234-123456789abc").unwrap();
    let update = ReplicaUpdate {
        email: "a@x.com".to_string(),
        first_name: "A".to_string(),
        last_name: String::new(),
        employee_code: Some("E9".to_string()),
        role: None,
        is_active: true,
    };

    let rewritten = update.with_namespaced_email(&id);

    assert_eq!(
        rewritten.email,
        "12345678-1234-1234-1234-123456789abc_a@x.com"
    );
    assert_eq!(rewritten.employee_code, update.employee_code);
    assert_eq!(rewritten.role, None);
}

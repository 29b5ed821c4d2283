
use hd_auth::ClaimSet;

use chrono::{Duration, Utc};
use uuid::Uuid;

pub(crate) const TEST_USER_ID: &str = "7b0e9c3a-54f2-4f57-9d4c-2f5a1f1f9a10";

pub(crate) fn test_claims() -> ClaimSet {
    ClaimSet {
        user_id: Uuid::parse_str(TEST_USER_ID).unwrap(),
        employee_code: Some("E1".to_string()),
        full_name: Some("Jane Doe".to_string()),
        email: Some("jane@x.com".to_string()),
        role: Some("requestor".to_string()),
        is_active: true,
        expires_at: Utc::now() + Duration::hours(1),
    }
}

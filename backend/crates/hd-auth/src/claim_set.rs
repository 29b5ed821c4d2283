use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Verified, normalised claims extracted from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSet {
    pub user_id: Uuid,
    /// Trimmed; `None` when absent or blank
    pub employee_code: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_active: bool,
    pub expires_at: DateTime<Utc>,
}

impl ClaimSet {
    /// Name parts split on the first space; everything after it is the last name.
    pub fn name_parts(&self) -> (String, String) {
        split_full_name(self.full_name.as_deref().unwrap_or_default())
    }

    pub fn carries_role(&self) -> bool {
        self.role.is_some()
    }
}

pub fn split_full_name(full_name: &str) -> (String, String) {
    match full_name.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (full_name.to_string(), String::new()),
    }
}

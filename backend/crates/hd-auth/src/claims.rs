use crate::{AuthError, ClaimSet, Result as AuthErrorResult};

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Raw JWT payload as issued by the identity authority.
///
/// Several claims have legacy aliases (`sub` for `user_id`, `code` for
/// `employee_code`, `name` for `full_name`). Identity claims are kept as raw JSON
/// values so that a non-string subject can be told apart from a missing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<Value>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Presence matters: an absent role must never overwrite a stored one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl TokenClaims {
    /// Flatten and normalise the payload into a [`ClaimSet`].
    #[track_caller]
    pub fn into_claim_set(self) -> AuthErrorResult<ClaimSet> {
        let user_id = self.identity()?;

        let expires_at = DateTime::from_timestamp(self.exp, 0).ok_or_else(|| {
            AuthError::MalformedToken {
                message: format!("exp out of range: {}", self.exp),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let employee_code = first_non_empty(self.employee_code, self.code)
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty());

        let full_name = first_non_empty(self.full_name, self.name);

        let email = self.email.map(|email| email.trim().to_string());

        Ok(ClaimSet {
            user_id,
            employee_code,
            full_name,
            email,
            role: self.role,
            is_active: self.is_active.unwrap_or(true),
            expires_at,
        })
    }

    #[track_caller]
    fn identity(&self) -> AuthErrorResult<Uuid> {
        let candidates = [("user_id", &self.user_id), ("sub", &self.sub)];

        for (claim, value) in candidates {
            match value {
                None => continue,
                Some(Value::String(raw)) if raw.is_empty() => continue,
                Some(Value::String(raw)) => {
                    return Uuid::parse_str(raw).map_err(|_| AuthError::UnrecognizedIdentity {
                        claim,
                        value: raw.clone(),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
                Some(other) => {
                    return Err(AuthError::UnrecognizedIdentity {
                        claim,
                        value: other.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            }
        }

        Err(AuthError::NoIdentityClaim {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

fn first_non_empty(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|value| !value.is_empty())
        .or(fallback.filter(|value| !value.is_empty()))
}

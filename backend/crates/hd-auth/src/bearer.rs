use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use http::{HeaderMap, header::AUTHORIZATION};

/// Extract the token from `Authorization: Bearer <token>`
#[track_caller]
pub fn bearer_token(headers: &HeaderMap) -> AuthErrorResult<&str> {
    let caller = Location::caller();

    let value = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(caller),
        })?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(caller),
        })?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(caller),
        });
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MalformedToken {
            message: "empty bearer token".to_string(),
            location: ErrorLocation::from(caller),
        });
    }

    Ok(token)
}

//! Axum extractors over the principal attached by the authentication middleware

use crate::ApiError;

use hd_core::{ErrorLocation, Principal};

use std::convert::Infallible;
use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Principal if the request carried a resolvable token
pub struct MaybePrincipal(pub Option<Principal>);

impl<S: Send + Sync> FromRequestParts<S> for MaybePrincipal {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { Ok(MaybePrincipal(parts.extensions.get::<Principal>().cloned())) }
    }
}

/// Authenticated principal; rejects with `401 UNAUTHENTICATED` otherwise
pub struct CurrentPrincipal(pub Principal);

impl<S: Send + Sync> FromRequestParts<S> for CurrentPrincipal {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<Principal>()
                .cloned()
                .map(CurrentPrincipal)
                .ok_or_else(|| ApiError::Unauthenticated {
                    message: "A valid bearer token is required".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
        }
    }
}

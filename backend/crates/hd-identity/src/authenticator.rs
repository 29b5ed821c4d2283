use crate::{IdentityError, IdentityResolver, Result as IdentityErrorResult, SyncError};

use hd_auth::{AuthError, JwtValidator};
use hd_core::{ErrorLocation, Principal};

use std::panic::Location;
use std::sync::Arc;

use log::{debug, error, warn};

/// Token in, principal out: claims codec followed by identity resolution.
#[derive(Clone)]
pub struct Authenticator {
    validator: Arc<JwtValidator>,
    resolver: IdentityResolver,
}

impl Authenticator {
    pub fn new(validator: JwtValidator, resolver: IdentityResolver) -> Self {
        Self {
            validator: Arc::new(validator),
            resolver,
        }
    }

    pub fn validator(&self) -> &JwtValidator {
        &self.validator
    }

    /// Resolve on the caller's task. Dropping the future cancels the resolution.
    pub async fn authenticate(&self, token: &str) -> IdentityErrorResult<Principal> {
        let claims = self.validator.validate(token)?;
        Ok(self.resolver.resolve(&claims).await?)
    }

    /// Resolve on a spawned task so an aborted caller cannot interrupt the write.
    pub async fn authenticate_detached(&self, token: &str) -> IdentityErrorResult<Principal> {
        let claims = self.validator.validate(token)?;
        let id = claims.user_id;
        let resolver = self.resolver.clone();

        let handle = tokio::spawn(async move { resolver.resolve(&claims).await });

        match handle.await {
            Ok(result) => Ok(result?),
            Err(join_err) => {
                error!("Identity resolution task for {} died: {}", id, join_err);
                Err(IdentityError::Sync(SyncError::SyncFailure {
                    id,
                    message: format!("resolution task failed: {}", join_err),
                    location: ErrorLocation::from(Location::caller()),
                }))
            }
        }
    }

    /// Detached resolution with every failure collapsed to `None`.
    pub async fn authenticate_soft(&self, token: &str) -> Option<Principal> {
        match self.authenticate_detached(token).await {
            Ok(principal) => Some(principal),
            Err(IdentityError::Auth(e @ AuthError::Expired { .. })) => {
                debug!("Rejected expired token: {}", e);
                None
            }
            Err(IdentityError::Auth(e)) => {
                warn!("Rejected token [{}]: {}", e.error_code(), e);
                None
            }
            Err(IdentityError::Sync(e)) => {
                error!("Identity sync failed [{}]: {}", e.error_code(), e);
                None
            }
        }
    }
}

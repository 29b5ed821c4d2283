use crate::{SyncError, SyncMetrics, SyncResult, update_from_claims};

use hd_auth::ClaimSet;
use hd_core::{ErrorLocation, Principal, ReplicaUpdate};
use hd_db::{DbError, ReplicaStore};

use std::panic::Location;
use std::sync::Arc;

use log::{debug, error, warn};
use uuid::Uuid;

const EMAIL_FIELD: &str = "email";

/// Maps verified claims onto the local replica table.
///
/// Every resolution is one atomic upsert, at most one namespaced-email retry, and
/// at most one fallback read. No in-memory state is shared between calls.
#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn ReplicaStore>,
    metrics: SyncMetrics,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn ReplicaStore>) -> Self {
        Self {
            store,
            metrics: SyncMetrics::new(),
        }
    }

    pub async fn resolve(&self, claims: &ClaimSet) -> SyncResult<Principal> {
        let id = claims.user_id;
        let update = update_from_claims(claims);

        match self.store.upsert(id, &update).await {
            Ok(replica) => {
                self.metrics.upserted();
                debug!("Replicated identity {}", id);
                Ok(replica.to_principal())
            }
            Err(e) if e.is_unique_violation_on(EMAIL_FIELD) => {
                self.retry_with_namespaced_email(id, &update).await
            }
            Err(e) => self.fallback_to_existing(id, e).await,
        }
    }

    async fn retry_with_namespaced_email(
        &self,
        id: Uuid,
        update: &ReplicaUpdate,
    ) -> SyncResult<Principal> {
        let rewritten = update.with_namespaced_email(&id);

        match self.store.upsert(id, &rewritten).await {
            Ok(replica) => {
                self.metrics.conflict_rewritten();
                warn!(
                    "Email '{}' already held by another replica; stored identity {} as '{}'",
                    update.email, id, rewritten.email
                );
                Ok(replica.to_principal())
            }
            Err(source) => {
                self.metrics.conflict();
                error!(
                    "Identity {} could not be replicated with email '{}' or '{}': {}",
                    id, update.email, rewritten.email, source
                );
                Err(SyncError::SyncConflict {
                    id,
                    email: update.email.clone(),
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    async fn fallback_to_existing(
        &self,
        id: Uuid,
        cause: DbError,
    ) -> SyncResult<Principal> {
        match self.store.find_by_id(id).await {
            Ok(Some(replica)) => {
                self.metrics.degraded();
                warn!(
                    "Replica write for {} failed, serving stored copy: {}",
                    id, cause
                );
                Ok(replica.to_principal())
            }
            Ok(None) => {
                self.metrics.failure();
                error!("Replica write for {} failed with no stored copy: {}", id, cause);
                Err(SyncError::SyncFailure {
                    id,
                    message: cause.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(read_err) => {
                self.metrics.failure();
                error!(
                    "Replica write for {} failed ({}) and fallback read failed: {}",
                    id, cause, read_err
                );
                Err(SyncError::SyncFailure {
                    id,
                    message: format!("{}; fallback read: {}", cause, read_err),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}

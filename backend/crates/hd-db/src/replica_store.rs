use crate::Result as DbErrorResult;

use hd_core::{IdentityReplica, ReplicaUpdate};

use async_trait::async_trait;
use uuid::Uuid;

/// Storage primitives the identity resolver depends on.
#[async_trait]
pub trait ReplicaStore: Send + Sync {
    /// Create the replica with `update` as defaults, or apply `update` on top of the
    /// existing row. Must be a single atomic statement.
    ///
    /// Fails with `DbError::UniqueViolation` when another row already holds a
    /// unique value from `update`.
    async fn upsert(&self, id: Uuid, update: &ReplicaUpdate) -> DbErrorResult<IdentityReplica>;

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<IdentityReplica>>;
}

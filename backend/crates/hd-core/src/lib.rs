pub mod models;

pub use error_location::ErrorLocation;
pub use models::identity_replica::IdentityReplica;
pub use models::principal::Principal;
pub use models::replica_update::ReplicaUpdate;

/// Role assigned to a replica created from a token that carries no role claim.
pub const DEFAULT_ROLE: &str = "requestor";

#[cfg(test)]
mod tests;

pub mod authenticator;
pub mod error;
pub mod identity_resolver;
pub mod sync_metrics;
pub mod update_payload;

pub use authenticator::Authenticator;
pub use error::{IdentityError, Result, SyncError, SyncResult};
pub use identity_resolver::IdentityResolver;
pub use sync_metrics::SyncMetrics;
pub use update_payload::update_from_claims;

#[cfg(test)]
mod tests;

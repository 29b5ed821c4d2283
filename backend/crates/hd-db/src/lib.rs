pub mod connection;
pub mod error;
pub mod replica_store;
pub mod repositories;

pub use connection::pool::{connect, connect_in_memory, ping, run_migrations};
pub use error::{DbError, Result, unique_violation_field};
pub use replica_store::ReplicaStore;
pub use repositories::identity_replica_repository::IdentityReplicaRepository;

pub use sqlx::SqlitePool;

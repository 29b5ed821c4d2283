#![allow(dead_code)]

use hd_db::{IdentityReplicaRepository, SqlitePool};

use tempfile::TempDir;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    hd_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub async fn create_test_repository() -> IdentityReplicaRepository {
    IdentityReplicaRepository::new(create_test_pool().await)
}

/// On-disk pool with several connections. Keep the TempDir alive for the test.
pub async fn create_file_pool(max_connections: u32) -> (TempDir, SqlitePool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let pool = hd_db::connect(&dir.path().join("replicas.db"), max_connections)
        .await
        .expect("Failed to create file pool");
    (dir, pool)
}

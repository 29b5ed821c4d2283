pub mod identity_replica_repository;

pub mod identity_replica;
pub mod principal;
pub mod replica_update;

mod identity_replica;
mod replica_update;

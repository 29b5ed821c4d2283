use crate::{ConnectionAuth, ConnectionId, ConnectionInfo, Result as WsErrorResult, WsError};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{info, warn};
use tokio::sync::RwLock;

/// Registry for tracking active streaming connections
pub struct ConnectionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    max_total: usize,
}

struct RegistryInner {
    connections: HashMap<ConnectionId, ConnectionInfo>,
}

impl ConnectionRegistry {
    pub fn new(max_total: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                connections: HashMap::new(),
            })),
            max_total,
        }
    }

    /// Register a connection after its handshake. Anonymous connections count too.
    pub async fn register(&self, auth: &ConnectionAuth) -> WsErrorResult<ConnectionId> {
        let mut inner = self.inner.write().await;

        if inner.connections.len() >= self.max_total {
            warn!(
                "Total connection limit reached: {}/{}",
                inner.connections.len(),
                self.max_total
            );
            return Err(WsError::ConnectionLimitExceeded {
                current: inner.connections.len(),
                max: self.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let connection_id = ConnectionId::new();
        let info = ConnectionInfo {
            connection_id,
            principal_id: auth.principal_id(),
            state: auth.state(),
            connected_at: chrono::Utc::now(),
        };

        inner.connections.insert(connection_id, info);
        info!(
            "Registered connection {connection_id} as {} ({} total)",
            auth.state(),
            inner.connections.len()
        );

        Ok(connection_id)
    }

    /// Register and hand back a slot that frees itself when dropped.
    pub async fn register_scoped(&self, auth: &ConnectionAuth) -> WsErrorResult<Registration> {
        let connection_id = self.register(auth).await?;
        Ok(Registration {
            registry: self.clone(),
            connection_id,
        })
    }

    pub async fn unregister(&self, connection_id: ConnectionId) {
        let mut inner = self.inner.write().await;

        if inner.connections.remove(&connection_id).is_some() {
            info!(
                "Unregistered connection {connection_id} ({} total remaining)",
                inner.connections.len()
            );
        }
    }

    pub async fn get(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner.connections.get(&connection_id).cloned()
    }

    pub async fn total_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.connections.len()
    }

    /// Connections carrying a principal
    pub async fn authenticated_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner
            .connections
            .values()
            .filter(|info| info.principal_id.is_some())
            .count()
    }

    /// Snapshot of all connections opened by one principal
    pub async fn connections_for(&self, principal_id: uuid::Uuid) -> Vec<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner
            .connections
            .values()
            .filter(|info| info.principal_id == Some(principal_id))
            .cloned()
            .collect()
    }
}

/// A registered slot. Dropping it unregisters the connection, including when
/// the upgrade never completes and the socket handler is never run.
pub struct Registration {
    registry: ConnectionRegistry,
    connection_id: ConnectionId,
}

impl Registration {
    pub fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        let connection_id = self.connection_id;

        if let Ok(mut inner) = self.registry.inner.try_write() {
            if inner.connections.remove(&connection_id).is_some() {
                info!(
                    "Released connection {connection_id} ({} total remaining)",
                    inner.connections.len()
                );
            }
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let registry = self.registry.clone();
                handle.spawn(async move { registry.unregister(connection_id).await });
            }
            Err(_) => warn!("Connection {connection_id} leaked: no runtime to release it"),
        }
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            max_total: self.max_total,
        }
    }
}

use crate::{ConnectionId, HandshakeState};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Information about an active connection
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    /// `None` for anonymous (rejected) connections
    pub principal_id: Option<Uuid>,
    pub state: HandshakeState,
    pub connected_at: DateTime<Utc>,
}

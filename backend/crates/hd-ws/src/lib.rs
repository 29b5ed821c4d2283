pub mod app_state;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod connection_registry;
pub mod dispatcher;
pub mod error;
pub mod error_codes;
pub mod handshake;
pub mod messages;
pub mod metrics;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod web_socket_connection;

pub use app_state::{AppState, HandshakeParams, handler};
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use connection_registry::{ConnectionRegistry, Registration};
pub use dispatcher::dispatch;
pub use error::{Result, WsError};
pub use error_codes::{HANDSHAKE_TIMEOUT, INVALID_MESSAGE, MISSING_TOKEN, UNAUTHENTICATED};
pub use handshake::{ConnectionAuth, HandshakeState};
pub use messages::{ClientMessage, ServerMessage};
pub use metrics::Metrics;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use web_socket_connection::WebSocketConnection;

#[cfg(test)]
mod tests;

use crate::{
    ConnectionAuth, ConnectionConfig, ConnectionId, Metrics, Result as WsErrorResult,
    ServerMessage, ShutdownGuard, WsError, dispatch,
};

use hd_core::ErrorLocation;

use std::panic::Location;

use axum::body::Bytes;
use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at};

/// Manages a single streaming connection
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    auth: ConnectionAuth,
    config: ConnectionConfig,
    metrics: Metrics,
}

impl WebSocketConnection {
    pub fn new(
        connection_id: ConnectionId,
        auth: ConnectionAuth,
        config: ConnectionConfig,
        metrics: Metrics,
    ) -> Self {
        Self {
            connection_id,
            auth,
            config,
            metrics,
        }
    }

    /// Handle the connection lifecycle until close, heartbeat timeout or shutdown
    pub async fn handle(
        self,
        socket: WebSocket,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        log::info!(
            "Connection {} established ({}, principal {:?})",
            self.connection_id,
            self.auth.state(),
            self.auth.principal_id()
        );

        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Bounded channel for outgoing messages (backpressure handling)
        let (tx, mut rx) = mpsc::channel::<Message>(self.config.send_buffer_size);

        let send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
        });

        let period = self.config.heartbeat_interval();
        let mut heartbeat = interval_at(Instant::now() + period, period);
        let mut last_seen = Instant::now();

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(Message::Close(_))) => {
                            log::info!("Received close frame from connection {}", self.connection_id);
                            break Ok(());
                        }
                        Some(Ok(msg)) => {
                            last_seen = Instant::now();
                            if let Err(e) = self.handle_client_message(msg, &tx) {
                                log::error!(
                                    "Error handling message from connection {}: {}",
                                    self.connection_id,
                                    e
                                );
                                self.metrics.error_occurred(e.error_code());
                                break Err(e);
                            }
                        }
                        Some(Err(e)) => {
                            log::error!("Socket error on connection {}: {}", self.connection_id, e);
                            break Err(WsError::ConnectionClosed {
                                reason: format!("socket error: {}", e),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => {
                            log::info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                    }
                }

                _ = heartbeat.tick() => {
                    if last_seen.elapsed() > self.config.heartbeat_timeout() {
                        log::warn!("Connection {} missed heartbeats", self.connection_id);
                        break Err(WsError::HeartbeatTimeout {
                            timeout_secs: self.config.heartbeat_timeout_secs,
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                    if let Err(e) = enqueue(&tx, Message::Ping(Bytes::new())) {
                        break Err(e);
                    }
                }

                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {} gracefully", self.connection_id);
                    let _ = tx.try_send(Message::Close(None));
                    break Ok(());
                }
            }
        };

        drop(tx);
        let _ = send_task.await;

        self.metrics.connection_closed(match &result {
            Ok(()) => "normal",
            Err(e) => e.error_code(),
        });

        log::info!("Connection {} closed", self.connection_id);

        result
    }

    fn handle_client_message(&self, msg: Message, tx: &mpsc::Sender<Message>) -> WsErrorResult<()> {
        match msg {
            Message::Text(text) => {
                self.metrics.message_received();
                let reply = dispatch(text.as_str(), &self.auth);
                self.reply(reply, tx)
            }
            Message::Binary(data) => {
                log::debug!(
                    "Ignoring binary frame ({} bytes) from connection {}",
                    data.len(),
                    self.connection_id
                );
                Ok(())
            }
            Message::Ping(data) => enqueue(tx, Message::Pong(data)),
            // Heartbeat response; last_seen already refreshed
            Message::Pong(_) => Ok(()),
            Message::Close(_) => Ok(()),
        }
    }

    fn reply(&self, reply: ServerMessage, tx: &mpsc::Sender<Message>) -> WsErrorResult<()> {
        let json = serde_json::to_string(&reply)?;
        enqueue(tx, Message::Text(json.into()))?;
        self.metrics.message_sent(reply.kind());
        Ok(())
    }
}

/// Queue a frame without waiting; a full queue means the client is too slow.
#[track_caller]
fn enqueue(tx: &mpsc::Sender<Message>, msg: Message) -> WsErrorResult<()> {
    tx.try_send(msg).map_err(|e| match e {
        mpsc::error::TrySendError::Full(_) => WsError::SendBufferFull {
            location: ErrorLocation::from(Location::caller()),
        },
        mpsc::error::TrySendError::Closed(_) => WsError::ConnectionClosed {
            reason: "send task finished".to_string(),
            location: ErrorLocation::from(Location::caller()),
        },
    })
}

#![allow(dead_code)]

use hd_ws::ServerMessage;

use axum::body::Bytes;
use axum_test::{TestServer, TestWebSocket, WsMessage};
use serde_json::json;

/// Streaming test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect with `token` passed as the query parameter
    pub async fn connect(server: &TestServer, token: &str) -> Self {
        let ws = server
            .get_websocket("/ws")
            .add_query_param("token", token)
            .await
            .into_websocket()
            .await;

        Self { ws }
    }

    /// Connect without any token
    pub async fn connect_anonymous(server: &TestServer) -> Self {
        let ws = server.get_websocket("/ws").await.into_websocket().await;

        Self { ws }
    }

    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    pub async fn send_binary(&mut self, data: &'static [u8]) {
        self.ws
            .send_message(WsMessage::Binary(Bytes::from_static(data)))
            .await;
    }

    pub async fn receive(&mut self) -> ServerMessage {
        self.ws.receive_json::<ServerMessage>().await
    }

    pub async fn ping(&mut self) -> ServerMessage {
        self.ws.send_json(&json!({ "type": "ping" })).await;
        self.receive().await
    }

    pub async fn whoami(&mut self) -> ServerMessage {
        self.ws.send_json(&json!({ "type": "whoami" })).await;
        self.receive().await
    }

    pub async fn close(self) {
        self.ws.close().await;
    }
}

/// Error code of an error reply
pub fn error_code(message: &ServerMessage) -> Option<&str> {
    match message {
        ServerMessage::Error { code, .. } => Some(code.as_str()),
        _ => None,
    }
}

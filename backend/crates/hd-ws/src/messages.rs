use hd_core::Principal;

use serde::{Deserialize, Serialize};

/// Text frames accepted from clients
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Ping,
    Whoami,
}

/// Text frames sent to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Pong,
    Whoami { principal: Principal },
    Error { code: String, message: String },
}

impl ServerMessage {
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.to_string(),
            message: message.into(),
        }
    }

    /// Label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pong => "pong",
            Self::Whoami { .. } => "whoami",
            Self::Error { .. } => "error",
        }
    }
}

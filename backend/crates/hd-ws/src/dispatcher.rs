use crate::error_codes::{INVALID_MESSAGE, UNAUTHENTICATED};
use crate::{ClientMessage, ConnectionAuth, ServerMessage};

use log::debug;

/// Answer one client text frame using the principal cached at handshake.
pub fn dispatch(text: &str, auth: &ConnectionAuth) -> ServerMessage {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            debug!("Unrecognised client frame: {}", e);
            return ServerMessage::error(INVALID_MESSAGE, e.to_string());
        }
    };

    match message {
        ClientMessage::Ping => ServerMessage::Pong,
        ClientMessage::Whoami => match auth.principal() {
            Some(principal) => ServerMessage::Whoami {
                principal: principal.clone(),
            },
            None => ServerMessage::error(UNAUTHENTICATED, "Connection is not authenticated"),
        },
    }
}

use crate::error_codes::{HANDSHAKE_TIMEOUT, MISSING_TOKEN};

use hd_auth::AuthError;
use hd_core::Principal;
use hd_identity::{Authenticator, IdentityError};

use std::time::Duration;

use log::{debug, error, info, warn};
use uuid::Uuid;

/// Connection authentication lifecycle.
///
/// `AwaitingHandshake -> Validating -> {Authenticated, Rejected}`; a missing
/// token skips `Validating`. Both terminal states keep the connection open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    AwaitingHandshake,
    Validating,
    Authenticated,
    Rejected,
}

impl HandshakeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingHandshake => "awaiting_handshake",
            Self::Validating => "validating",
            Self::Authenticated => "authenticated",
            Self::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Authenticated | Self::Rejected)
    }
}

impl std::fmt::Display for HandshakeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Principal cached for the lifetime of one connection. Never re-validated.
#[derive(Debug, Clone)]
pub struct ConnectionAuth {
    state: HandshakeState,
    principal: Option<Principal>,
    rejection: Option<&'static str>,
}

impl ConnectionAuth {
    pub fn new() -> Self {
        Self {
            state: HandshakeState::AwaitingHandshake,
            principal: None,
            rejection: None,
        }
    }

    pub fn authenticated(principal: Principal) -> Self {
        Self {
            state: HandshakeState::Authenticated,
            principal: Some(principal),
            rejection: None,
        }
    }

    pub fn rejected(code: &'static str) -> Self {
        Self {
            state: HandshakeState::Rejected,
            principal: None,
            rejection: Some(code),
        }
    }

    /// Run the handshake for the `token` query parameter.
    ///
    /// Resolution runs on a detached task, so hitting `timeout` rejects the
    /// connection without cancelling a replica write already in flight.
    pub async fn handshake(
        authenticator: &Authenticator,
        token: Option<&str>,
        timeout: Duration,
    ) -> Self {
        let mut auth = Self::new();

        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            debug!("Handshake without token, connection is anonymous");
            auth.reject(MISSING_TOKEN);
            return auth;
        };

        auth.transition(HandshakeState::Validating);

        match tokio::time::timeout(timeout, authenticator.authenticate_detached(token)).await {
            Ok(Ok(principal)) => auth.accept(principal),
            Ok(Err(e)) => {
                match &e {
                    IdentityError::Auth(AuthError::Expired { .. }) => {
                        debug!("Handshake token expired: {}", e)
                    }
                    IdentityError::Auth(_) => warn!("Handshake token rejected: {}", e),
                    IdentityError::Sync(_) => error!("Handshake identity sync failed: {}", e),
                }
                auth.reject(e.error_code());
            }
            Err(_) => {
                warn!(
                    "Handshake identity resolution exceeded {}s",
                    timeout.as_secs_f64()
                );
                auth.reject(HANDSHAKE_TIMEOUT);
            }
        }

        auth
    }

    pub fn state(&self) -> HandshakeState {
        self.state
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn principal_id(&self) -> Option<Uuid> {
        self.principal.as_ref().map(|p| p.id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == HandshakeState::Authenticated
    }

    /// Error code behind a `Rejected` state
    pub fn rejection(&self) -> Option<&'static str> {
        self.rejection
    }

    fn accept(&mut self, principal: Principal) {
        info!("Handshake authenticated principal {}", principal.id);
        self.principal = Some(principal);
        self.transition(HandshakeState::Authenticated);
    }

    fn reject(&mut self, code: &'static str) {
        self.principal = None;
        self.rejection = Some(code);
        self.transition(HandshakeState::Rejected);
    }

    fn transition(&mut self, next: HandshakeState) {
        debug!("Handshake state {} -> {}", self.state, next);
        self.state = next;
    }
}

impl Default for ConnectionAuth {
    fn default() -> Self {
        Self::new()
    }
}

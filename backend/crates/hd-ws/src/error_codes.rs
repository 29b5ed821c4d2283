//! Error codes sent to streaming clients.

/// Operation needs an authenticated principal
pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";

/// Frame was not a recognised JSON message
pub const INVALID_MESSAGE: &str = "INVALID_MESSAGE";

/// Handshake carried no token; the connection stays anonymous
pub const MISSING_TOKEN: &str = "MISSING_TOKEN";

/// Identity resolution did not finish within the handshake window
pub const HANDSHAKE_TIMEOUT: &str = "HANDSHAKE_TIMEOUT";

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid token signature {location}")]
    InvalidSignature {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    Expired { location: ErrorLocation },

    #[error("Unrecognized identity '{value}' in claim '{claim}' {location}")]
    UnrecognizedIdentity {
        claim: &'static str,
        value: String,
        location: ErrorLocation,
    },

    #[error("Token contained no recognizable user identification {location}")]
    NoIdentityClaim { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Invalid signing configuration: {message} {location}")]
    InvalidKey {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedToken { .. } => "MALFORMED_TOKEN",
            Self::InvalidSignature { .. } => "INVALID_SIGNATURE",
            Self::Expired { .. } => "TOKEN_EXPIRED",
            Self::UnrecognizedIdentity { .. } => "UNRECOGNIZED_IDENTITY",
            Self::NoIdentityClaim { .. } => "NO_IDENTITY_CLAIM",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::InvalidKey { .. } => "INVALID_KEY",
        }
    }

    /// True when the request simply carried no credentials.
    pub fn is_missing_credentials(&self) -> bool {
        matches!(self, Self::MissingHeader { .. } | Self::InvalidScheme { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

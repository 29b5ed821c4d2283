use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors from calls to another service
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Resource not found: {resource} {location}")]
    NotFound {
        resource: String,
        location: ErrorLocation,
    },

    #[error("Request timed out: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error {status}: {message} (code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Response decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Timeouts are split out so callers can report them separately
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ClientError::Timeout {
                message: err.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        ClientError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn not_found(resource: impl Into<String>) -> Self {
        ClientError::NotFound {
            resource: resource.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Transport failures, timeouts and 500/502/503/504 responses
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Transport { .. } => true,
            Self::Api { status, .. } => matches!(status, 500 | 502 | 503 | 504),
            Self::NotFound { .. } | Self::Decode { .. } => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

use hd_auth::AuthError;
use hd_db::DbError;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// Replication failures. Both leave the caller without a principal.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Email '{email}' for identity {id} conflicts with another replica {location}")]
    SyncConflict {
        id: Uuid,
        email: String,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Identity {id} could not be replicated: {message} {location}")]
    SyncFailure {
        id: Uuid,
        message: String,
        location: ErrorLocation,
    },
}

impl SyncError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SyncConflict { .. } => "SYNC_CONFLICT",
            Self::SyncFailure { .. } => "SYNC_FAILURE",
        }
    }

    pub fn identity(&self) -> Uuid {
        match self {
            Self::SyncConflict { id, .. } | Self::SyncFailure { id, .. } => *id,
        }
    }
}

/// Everything that can stop a token from becoming a principal.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Sync(#[from] SyncError),
}

impl IdentityError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Auth(e) => e.error_code(),
            Self::Sync(e) => e.error_code(),
        }
    }
}

pub type SyncResult<T> = std::result::Result<T, SyncError>;
pub type Result<T> = std::result::Result<T, IdentityError>;

use hd_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated on '{field}' {location}")]
    UniqueViolation {
        field: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// True when the write collided with another record's `field`
    pub fn is_unique_violation_on(&self, field: &str) -> bool {
        matches!(self, Self::UniqueViolation { field: f, .. } if f == field)
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &source
            && db_err.is_unique_violation()
        {
            return Self::UniqueViolation {
                field: unique_violation_field(db_err.message()),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Column name from a SQLite message such as
/// `UNIQUE constraint failed: identity_replicas.email`.
pub fn unique_violation_field(message: &str) -> String {
    message
        .rsplit_once("failed:")
        .map(|(_, columns)| columns)
        .and_then(|columns| columns.split(',').next())
        .map(|column| column.trim())
        .and_then(|column| column.rsplit('.').next())
        .filter(|column| !column.is_empty())
        .unwrap_or("unknown")
        .to_string()
}

pub type Result<T> = std::result::Result<T, DbError>;

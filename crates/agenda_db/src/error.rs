//! Error types for the schedule store

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when working with the schedule store
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),

    /// Error with database transaction
    #[error("Database transaction error: {0}")]
    TransactionError(String),

    /// A stored value could not be turned back into a model
    #[error("Invalid stored data: {0}")]
    InvalidData(String),

    /// The booking pre-check found a live appointment at the same key
    #[error("Slot {start} on {date} is already reserved for professional {professional_id}")]
    SlotTaken {
        professional_id: i64,
        date: NaiveDate,
        start: String,
    },

    /// A unique constraint rejected the write
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
}

impl DbError {
    /// Whether this error means "someone else holds that slot".
    pub fn is_conflict(&self) -> bool {
        matches!(self, DbError::SlotTaken { .. } | DbError::UniqueViolation(_))
    }
}

/// Returns true when the driver reports a unique/primary-key constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation() || db_err.message().contains("UNIQUE constraint failed")
        }
        _ => false,
    }
}

/// Maps a failed write, turning unique violations into [`DbError::UniqueViolation`].
pub(crate) fn map_write_error(err: sqlx::Error, what: &str) -> DbError {
    if is_unique_violation(&err) {
        DbError::UniqueViolation(format!("{}: {}", what, err))
    } else {
        DbError::QueryError(format!("{}: {}", what, err))
    }
}

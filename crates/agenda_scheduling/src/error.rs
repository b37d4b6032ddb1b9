// --- File: crates/agenda_scheduling/src/error.rs ---
use agenda_common::AgendaError;
use agenda_db::DbError;
use thiserror::Error;

/// Message shown to clients whose slot was taken first.
pub const SLOT_TAKEN_MESSAGE: &str = "this time is already reserved";

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("Failed to parse time: {0}")]
    Parse(String),
    #[error("Duration must be positive, got {0} minutes")]
    InvalidDuration(i64),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Store error: {0}")]
    Store(#[from] DbError),
}

impl SchedulingError {
    pub fn slot_taken() -> Self {
        SchedulingError::Conflict(SLOT_TAKEN_MESSAGE.to_string())
    }
}

impl From<SchedulingError> for AgendaError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::Parse(msg) => AgendaError::ParseError(msg),
            SchedulingError::InvalidDuration(minutes) => AgendaError::ValidationError(format!(
                "durationMinutes must be positive, got {}",
                minutes
            )),
            SchedulingError::Validation(msg) => AgendaError::ValidationError(msg),
            SchedulingError::Conflict(msg) => AgendaError::ConflictError(msg),
            SchedulingError::NotFound(msg) => AgendaError::NotFoundError(msg),
            SchedulingError::Store(e) if e.is_conflict() => {
                AgendaError::ConflictError(SLOT_TAKEN_MESSAGE.to_string())
            }
            SchedulingError::Store(e) => AgendaError::DatabaseError(e.to_string()),
        }
    }
}

// --- File: crates/agenda_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The outer error type of the agenda service.
///
/// Every crate converts its own error into one of these variants; the variant decides
/// the HTTP status code the caller sees.
#[derive(Error, Debug)]
pub enum AgendaError {
    /// Malformed input that could not be parsed (times, dates, headers)
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input parsed but is not acceptable
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// The resource is taken (e.g. the time slot is already reserved)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// The operation was retired
    #[error("Gone: {0}")]
    GoneError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for AgendaError {
    fn status_code(&self) -> u16 {
        match self {
            AgendaError::ParseError(_) => 400,
            AgendaError::ConfigError(_) => 500,
            AgendaError::ValidationError(_) => 400,
            AgendaError::DatabaseError(_) => 500,
            AgendaError::ExternalServiceError { .. } => 502,
            AgendaError::ConflictError(_) => 409,
            AgendaError::NotFoundError(_) => 404,
            AgendaError::GoneError(_) => 410,
            AgendaError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, AgendaError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, AgendaError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, AgendaError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| AgendaError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, AgendaError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| AgendaError::InternalError(format!("{}: {}", f(), error)))
    }
}

impl From<serde_json::Error> for AgendaError {
    fn from(err: serde_json::Error) -> Self {
        AgendaError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for AgendaError {
    fn from(err: std::io::Error) -> Self {
        AgendaError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> AgendaError {
    AgendaError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> AgendaError {
    AgendaError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> AgendaError {
    AgendaError::ConflictError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> AgendaError {
    AgendaError::InternalError(message.to_string())
}

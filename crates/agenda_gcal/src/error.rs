use thiserror::Error;

/// Errors that can occur when pushing to Google Calendar.
#[derive(Error, Debug)]
pub enum GcalPushError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
    #[error("Authentication failed: {0}")]
    AuthError(String),
    #[error("HTTPS connector error: {0}")]
    ConnectorError(#[from] std::io::Error),
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Google Calendar configuration error: {0}")]
    ConfigError(String),
}

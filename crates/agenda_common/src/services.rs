// --- File: crates/agenda_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! The booking path only knows these traits; concrete clients live in their own crates.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use tracing::info;

use crate::models::CalendarCredentials;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// Pushes appointments into a professional's external calendar.
///
/// Best effort: callers log failures and carry on.
pub trait CalendarPush: Send + Sync {
    /// Error type returned by push operations.
    type Error: std::error::Error + Send + Sync + 'static;

    fn push_event(
        &self,
        credentials: &CalendarCredentials,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error>;
}

/// Erases the error type of a [`CalendarPush`] so implementations can sit behind
/// `Arc<dyn CalendarPush<Error = BoxedError>>`.
pub struct BoxedCalendarPush<P> {
    inner: P,
}

impl<P: CalendarPush> BoxedCalendarPush<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: CalendarPush> CalendarPush for BoxedCalendarPush<P> {
    type Error = BoxedError;

    fn push_event(
        &self,
        credentials: &CalendarCredentials,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let pushed = self.inner.push_event(credentials, event);
        Box::pin(async move { pushed.await.map_err(|e| BoxedError(Box::new(e))) })
    }
}

/// Event pushed to an external calendar. Times are local wall-clock times in `time_zone`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub summary: String,
    pub description: Option<String>,
    /// `YYYY-MM-DDTHH:MM:00`
    pub start_local: String,
    /// `YYYY-MM-DDTHH:MM:00`
    pub end_local: String,
    /// IANA zone name, e.g. `America/Argentina/Buenos_Aires`.
    pub time_zone: String,
}

/// Represents the result of a calendar event operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventResult {
    /// The ID of the event.
    pub event_id: Option<String>,
    /// The status of the event.
    pub status: String,
}

/// Calendar push used when no external calendar is configured. Only logs.
#[derive(Debug, Clone, Default)]
pub struct LoggingCalendarPush;

impl CalendarPush for LoggingCalendarPush {
    type Error = BoxedError;

    fn push_event(
        &self,
        credentials: &CalendarCredentials,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let professional_id = credentials.professional_id;
        Box::pin(async move {
            info!(
                "Calendar push disabled, not sending '{}' ({} - {}) for professional {}",
                event.summary, event.start_local, event.end_local, professional_id
            );
            Ok(CalendarEventResult {
                event_id: None,
                status: "skipped".to_string(),
            })
        })
    }
}

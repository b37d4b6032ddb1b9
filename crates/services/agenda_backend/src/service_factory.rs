// --- File: crates/services/agenda_backend/src/service_factory.rs ---
//! Picks the calendar push implementation for this run.

use agenda_common::services::LoggingCalendarPush;
use agenda_config::AppConfig;
use agenda_scheduling::sync::SharedCalendarPush;
use std::sync::Arc;
use tracing::{info, warn};

#[cfg(feature = "gcal")]
use agenda_common::services::BoxedCalendarPush;
#[cfg(feature = "gcal")]
use agenda_gcal::GoogleCalendarPush;
#[cfg(feature = "gcal")]
use tracing::error;

/// Google Calendar when enabled and configured, otherwise a push that only logs.
pub fn calendar_push(config: &AppConfig) -> SharedCalendarPush {
    if !config.use_gcal {
        info!("Calendar sync disabled (use_gcal = false)");
        return Arc::new(LoggingCalendarPush);
    }

    #[cfg(feature = "gcal")]
    {
        match config.gcal.as_ref().map(GoogleCalendarPush::new) {
            Some(Ok(push)) => {
                info!(
                    "Calendar sync pushes to Google Calendar '{}'",
                    push.calendar_id()
                );
                return Arc::new(BoxedCalendarPush::new(push));
            }
            Some(Err(e)) => error!("Google Calendar push unavailable: {}", e),
            None => warn!("use_gcal is set but the [gcal] section is missing"),
        }
    }
    #[cfg(not(feature = "gcal"))]
    {
        warn!("use_gcal is set but this build has no gcal feature");
    }

    Arc::new(LoggingCalendarPush)
}

/// Zone of pushed events: the gcal section wins over the business zone.
pub fn calendar_time_zone(config: &AppConfig) -> String {
    config
        .gcal
        .as_ref()
        .and_then(|gcal| gcal.time_zone.clone())
        .unwrap_or_else(|| config.scheduling().time_zone().to_string())
}

// --- File: crates/agenda_gcal/src/service.rs ---
//! Google Calendar implementation of [`CalendarPush`].
//!
//! Each professional links their own Google account; the stored refresh token is
//! exchanged through the authorized-user flow and the event is inserted into the
//! configured calendar (default `primary`) of that account.

use crate::auth::{create_calendar_hub, HubType, OAuthClient};
use crate::error::GcalPushError;
use crate::time::{local_to_utc, parse_zone};
use agenda_common::models::CalendarCredentials;
use agenda_common::services::{BoxFuture, CalendarEvent, CalendarEventResult, CalendarPush};
use agenda_config::GcalConfig;
use google_calendar3::api::{Event, EventDateTime};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Builds the Google event body. Times are sent as UTC instants tagged with the zone.
pub fn google_event(event: &CalendarEvent) -> Result<Event, GcalPushError> {
    let zone = parse_zone(&event.time_zone)?;
    let start = local_to_utc(&event.start_local, zone)?;
    let end = local_to_utc(&event.end_local, zone)?;
    if end <= start {
        return Err(GcalPushError::TimeParseError(format!(
            "event ends at {} before it starts at {}",
            event.end_local, event.start_local
        )));
    }

    Ok(Event {
        summary: Some(event.summary.clone()),
        description: event.description.clone(),
        start: Some(EventDateTime {
            date_time: Some(start),
            time_zone: Some(event.time_zone.clone()),
            ..Default::default()
        }),
        end: Some(EventDateTime {
            date_time: Some(end),
            time_zone: Some(event.time_zone.clone()),
            ..Default::default()
        }),
        ..Default::default()
    })
}

pub struct GoogleCalendarPush {
    oauth: OAuthClient,
    calendar_id: String,
    // professional id -> (refresh token, hub)
    hubs: Mutex<HashMap<i64, (String, Arc<HubType>)>>,
}

impl GoogleCalendarPush {
    pub fn new(config: &GcalConfig) -> Result<Self, GcalPushError> {
        let client_id = config
            .client_id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| GcalPushError::ConfigError("missing gcal.client_id".to_string()))?;
        let client_secret = config
            .client_secret
            .clone()
            .filter(|secret| !secret.is_empty())
            .ok_or_else(|| GcalPushError::ConfigError("missing gcal.client_secret".to_string()))?;

        Ok(Self {
            oauth: OAuthClient {
                client_id,
                client_secret,
            },
            calendar_id: config.calendar_id().to_string(),
            hubs: Mutex::new(HashMap::new()),
        })
    }

    pub fn calendar_id(&self) -> &str {
        &self.calendar_id
    }

    fn cached_hub(&self, credentials: &CalendarCredentials) -> Option<Arc<HubType>> {
        let hubs = self.hubs.lock().ok()?;
        hubs.get(&credentials.professional_id)
            .filter(|(token, _)| *token == credentials.refresh_token)
            .map(|(_, hub)| hub.clone())
    }

    async fn hub_for(
        &self,
        credentials: &CalendarCredentials,
    ) -> Result<Arc<HubType>, GcalPushError> {
        if let Some(hub) = self.cached_hub(credentials) {
            return Ok(hub);
        }
        debug!(
            "Creating calendar hub for professional {}",
            credentials.professional_id
        );
        let hub = Arc::new(create_calendar_hub(&self.oauth, &credentials.refresh_token).await?);
        if let Ok(mut hubs) = self.hubs.lock() {
            hubs.insert(
                credentials.professional_id,
                (credentials.refresh_token.clone(), hub.clone()),
            );
        }
        Ok(hub)
    }
}

impl CalendarPush for GoogleCalendarPush {
    type Error = GcalPushError;

    fn push_event(
        &self,
        credentials: &CalendarCredentials,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let credentials = credentials.clone();
        Box::pin(async move {
            let body = google_event(&event)?;
            let hub = self.hub_for(&credentials).await?;

            let (_response, created) = hub
                .events()
                .insert(body, &self.calendar_id)
                .doit()
                .await?;

            info!(
                "Inserted Google Calendar event {:?} for professional {}",
                created.id, credentials.professional_id
            );
            Ok(CalendarEventResult {
                event_id: created.id,
                status: created.status.unwrap_or_else(|| "confirmed".to_string()),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(start: &str, end: &str) -> CalendarEvent {
        CalendarEvent {
            summary: "Appointment: Ana".into(),
            description: Some("Phone: +54 9 11 5555".into()),
            start_local: start.into(),
            end_local: end.into(),
            time_zone: "America/Argentina/Buenos_Aires".into(),
        }
    }

    #[test]
    fn event_body_carries_utc_and_zone() {
        let body = google_event(&event("2025-06-03T11:00:00", "2025-06-03T12:00:00")).unwrap();
        assert_eq!(body.summary.as_deref(), Some("Appointment: Ana"));
        let start = body.start.unwrap();
        assert_eq!(
            start.date_time.unwrap().to_rfc3339(),
            "2025-06-03T14:00:00+00:00"
        );
        assert_eq!(
            start.time_zone.as_deref(),
            Some("America/Argentina/Buenos_Aires")
        );
    }

    #[test]
    fn inverted_event_is_rejected() {
        assert!(google_event(&event("2025-06-03T12:00:00", "2025-06-03T11:00:00")).is_err());
    }

    #[test]
    fn config_requires_client_credentials() {
        assert!(matches!(
            GoogleCalendarPush::new(&GcalConfig::default()),
            Err(GcalPushError::ConfigError(_))
        ));
        let push = GoogleCalendarPush::new(&GcalConfig {
            client_id: Some("id".into()),
            client_secret: Some("secret".into()),
            calendar_id: None,
            time_zone: None,
        })
        .unwrap();
        assert_eq!(push.calendar_id(), "primary");
    }
}

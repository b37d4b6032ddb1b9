//! Calendar sync after a booking commits.
//!
//! The booking path only enqueues a [`CalendarSyncJob`]; a background worker looks up the
//! professional's credentials and pushes the event. Push failures are logged and dropped.

use agenda_common::models::{Appointment, CalendarCredentials};
use agenda_common::services::{BoxedError, CalendarEvent, CalendarPush};
use agenda_common::TenantContext;
use agenda_db::ScheduleStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

pub type SharedCalendarPush = Arc<dyn CalendarPush<Error = BoxedError>>;

#[derive(Debug, Clone)]
pub struct CalendarSyncJob {
    pub job_id: Uuid,
    pub tenant: TenantContext,
    pub appointment: Appointment,
}

/// Sending half of the sync channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CalendarSyncQueue {
    sender: mpsc::UnboundedSender<CalendarSyncJob>,
}

impl CalendarSyncQueue {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<CalendarSyncJob>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Queues a push for `appointment`. Never blocks; returns false if the worker is gone.
    pub fn enqueue(&self, tenant: TenantContext, appointment: Appointment) -> bool {
        let job = CalendarSyncJob {
            job_id: Uuid::new_v4(),
            tenant,
            appointment,
        };
        let job_id = job.job_id;
        let appointment_id = job.appointment.id;
        match self.sender.send(job) {
            Ok(()) => {
                debug!(
                    "Queued calendar sync job {} for appointment {}",
                    job_id, appointment_id
                );
                true
            }
            Err(_) => {
                warn!(
                    "Calendar sync worker stopped, appointment {} will not be pushed",
                    appointment_id
                );
                false
            }
        }
    }
}

/// Builds the external event for an appointment, in local time of `time_zone`.
pub fn event_for(appointment: &Appointment, time_zone: &str) -> CalendarEvent {
    CalendarEvent {
        summary: format!("Appointment: {}", appointment.client_name),
        description: appointment
            .client_phone
            .as_ref()
            .map(|phone| format!("Phone: {}", phone)),
        start_local: format!("{}T{}:00", appointment.date, appointment.start),
        end_local: format!("{}T{}:00", appointment.date, appointment.end),
        time_zone: time_zone.to_string(),
    }
}

/// Handles one job. Returns whether an event was pushed.
pub async fn process_job<S: ScheduleStore>(
    store: &S,
    push: &dyn CalendarPush<Error = BoxedError>,
    time_zone: &str,
    job: CalendarSyncJob,
) -> bool {
    let CalendarSyncJob {
        job_id,
        tenant,
        appointment,
    } = job;

    let credentials: CalendarCredentials = match store
        .find_credentials(&tenant, appointment.professional_id)
        .await
    {
        Ok(Some(credentials)) => credentials,
        Ok(None) => {
            debug!(
                "Professional {} has no linked calendar, skipping job {}",
                appointment.professional_id, job_id
            );
            return false;
        }
        Err(e) => {
            error!(
                "Job {}: failed to load calendar credentials for professional {}: {}",
                job_id, appointment.professional_id, e
            );
            return false;
        }
    };

    let event = event_for(&appointment, time_zone);
    match push.push_event(&credentials, event).await {
        Ok(result) => {
            info!(
                "Job {}: appointment {} pushed to calendar (event {:?}, status {})",
                job_id, appointment.id, result.event_id, result.status
            );
            true
        }
        Err(e) => {
            warn!(
                "Job {}: calendar push for appointment {} failed: {}",
                job_id, appointment.id, e
            );
            false
        }
    }
}

/// Starts the worker and returns the queue feeding it.
///
/// The worker exits once every queue clone is dropped.
pub fn spawn_calendar_sync_worker<S: ScheduleStore>(
    store: S,
    push: SharedCalendarPush,
    time_zone: String,
) -> (CalendarSyncQueue, JoinHandle<()>) {
    let (queue, mut receiver) = CalendarSyncQueue::channel();
    let handle = tokio::spawn(async move {
        info!("Calendar sync worker started (time zone {})", time_zone);
        while let Some(job) = receiver.recv().await {
            process_job(&store, push.as_ref(), &time_zone, job).await;
        }
        info!("Calendar sync worker stopped");
    });
    (queue, handle)
}

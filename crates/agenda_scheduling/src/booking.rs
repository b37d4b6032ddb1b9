//! The write path: reserve a slot, then hand the appointment to calendar sync.

use crate::error::SchedulingError;
use crate::sync::CalendarSyncQueue;
use crate::time::{to_clock, TimeWindow};
use agenda_common::models::{Appointment, AppointmentDraft, NewAppointment};
use agenda_common::TenantContext;
use agenda_db::ScheduleStore;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Body of `POST /appointments`.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[cfg_attr(feature = "openapi", schema(example = 5))]
    pub professional_id: i64,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date", example = "2025-06-03"))]
    pub date: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(example = "11:00"))]
    pub start: String,
    #[cfg_attr(feature = "openapi", schema(example = "12:00"))]
    pub end: String,
    #[serde(flatten)]
    pub draft: AppointmentDraft,
}

#[derive(Clone)]
pub struct BookingTransactor<S: ScheduleStore> {
    store: S,
    sync: Option<CalendarSyncQueue>,
}

impl<S: ScheduleStore> BookingTransactor<S> {
    /// A transactor that never pushes to external calendars.
    pub fn new(store: S) -> Self {
        Self { store, sync: None }
    }

    pub fn with_sync(store: S, sync: CalendarSyncQueue) -> Self {
        Self {
            store,
            sync: Some(sync),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Books `slot` for the professional on `date`.
    ///
    /// Input is validated before the store is touched. A taken slot, whether seen by the
    /// pre-check or by the unique index at commit, is [`SchedulingError::Conflict`]. The
    /// calendar push is queued only after the insert has committed.
    pub async fn book_slot(
        &self,
        tenant: &TenantContext,
        professional_id: i64,
        date: NaiveDate,
        slot: TimeWindow,
        draft: AppointmentDraft,
    ) -> Result<Appointment, SchedulingError> {
        validate(professional_id, slot, &draft)?;

        let start = to_clock(slot.start);
        let end = to_clock(slot.end);
        let appointment = NewAppointment {
            professional_id,
            date,
            start: start.clone(),
            end,
            draft,
        };

        let created = match self.store.reserve_slot(tenant, appointment).await {
            Ok(created) => created,
            Err(e) if e.is_conflict() => {
                info!(
                    "Booking rejected, slot {} on {} for professional {} is taken: {}",
                    start, date, professional_id, e
                );
                return Err(SchedulingError::slot_taken());
            }
            Err(e) => {
                error!(
                    "Booking failed for professional {} on {} at {}: {}",
                    professional_id, date, start, e
                );
                return Err(SchedulingError::Store(e));
            }
        };

        if let Some(sync) = &self.sync {
            sync.enqueue(*tenant, created.clone());
        }
        Ok(created)
    }

    /// Parses the request times and books.
    pub async fn book(
        &self,
        tenant: &TenantContext,
        request: BookingRequest,
    ) -> Result<Appointment, SchedulingError> {
        let slot = TimeWindow::parse(&request.start, &request.end)?;
        self.book_slot(
            tenant,
            request.professional_id,
            request.date,
            slot,
            request.draft,
        )
        .await
    }
}

fn validate(
    professional_id: i64,
    slot: TimeWindow,
    draft: &AppointmentDraft,
) -> Result<(), SchedulingError> {
    if professional_id <= 0 {
        return Err(SchedulingError::Validation(
            "professionalId must be positive".to_string(),
        ));
    }
    if draft.service_id <= 0 {
        return Err(SchedulingError::Validation(
            "serviceId must be positive".to_string(),
        ));
    }
    if slot.is_empty() {
        return Err(SchedulingError::Validation(format!(
            "slot {} is empty",
            slot
        )));
    }
    if draft.client_name.trim().is_empty() {
        return Err(SchedulingError::Validation(
            "clientName is required".to_string(),
        ));
    }
    if draft.amount_paid < 0.0 || draft.amount_due < 0.0 {
        return Err(SchedulingError::Validation(
            "amounts cannot be negative".to_string(),
        ));
    }
    Ok(())
}

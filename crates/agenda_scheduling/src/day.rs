//! Loads everything that shapes one professional's day from the store.

use crate::availability::{compute_availability, DaySchedule};
use crate::error::SchedulingError;
use crate::slots::{lunch_gap, regular_slots, Slot};
use agenda_common::models::{Appointment, DayOfWeek, ScheduleWindow, WorkingHours};
use agenda_common::TenantContext;
use agenda_db::{ScheduleStore, WindowKind};
use chrono::NaiveDate;
use tracing::debug;

/// Template row, dated windows and appointments of one professional on one date.
#[derive(Debug, Clone, Default)]
pub struct DayInputs {
    pub working_hours: Option<WorkingHours>,
    pub overtime: Vec<ScheduleWindow>,
    pub blocked: Vec<ScheduleWindow>,
    pub appointments: Vec<Appointment>,
}

impl DayInputs {
    pub async fn load<S: ScheduleStore>(
        store: &S,
        tenant: &TenantContext,
        professional_id: i64,
        date: NaiveDate,
    ) -> Result<Self, SchedulingError> {
        let day = DayOfWeek::from_date(date);
        let working_hours = store
            .find_working_hours(tenant, professional_id, day)
            .await?;
        let overtime = store
            .list_windows(tenant, WindowKind::Overtime, professional_id, date)
            .await?;
        let blocked = store
            .list_windows(tenant, WindowKind::Blocked, professional_id, date)
            .await?;
        let appointments = store
            .list_appointments_for_day(tenant, professional_id, date)
            .await?;

        debug!(
            "Loaded {} for professional {}: template={}, {} overtime, {} blocked, {} appointments",
            date,
            professional_id,
            working_hours.is_some(),
            overtime.len(),
            blocked.len(),
            appointments.len()
        );

        Ok(Self {
            working_hours,
            overtime,
            blocked,
            appointments,
        })
    }

    fn regular(&self, duration: i64) -> Result<Vec<Slot>, SchedulingError> {
        match &self.working_hours {
            Some(hours) => regular_slots(hours, duration),
            None if duration <= 0 => Err(SchedulingError::InvalidDuration(duration)),
            None => Ok(Vec::new()),
        }
    }

    pub fn available(&self, duration: i64) -> Result<Vec<Slot>, SchedulingError> {
        compute_availability(
            &self.regular(duration)?,
            &self.overtime,
            &self.blocked,
            &self.appointments,
            duration,
        )
    }

    pub fn schedule(&self, duration: i64) -> Result<DaySchedule, SchedulingError> {
        let gap = match &self.working_hours {
            Some(hours) => lunch_gap(hours)?,
            None => None,
        };
        DaySchedule::build(
            &self.regular(duration)?,
            gap,
            &self.overtime,
            &self.blocked,
            &self.appointments,
            duration,
        )
    }
}

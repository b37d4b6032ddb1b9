//! Repository for appointments

use crate::error::DbError;
use agenda_common::models::{Appointment, AppointmentFilter, AppointmentStatus, NewAppointment};
use agenda_common::TenantContext;
use chrono::NaiveDate;

pub trait AppointmentRepository {
    /// Check-then-insert inside one transaction.
    ///
    /// Fails with [`DbError::SlotTaken`] when a non-cancelled appointment already starts
    /// at `(professional, date, start)`, and with [`DbError::UniqueViolation`] when a
    /// concurrent insert wins the race on the unique index.
    fn reserve_slot(
        &self,
        tenant: &TenantContext,
        appointment: NewAppointment,
    ) -> impl std::future::Future<Output = Result<Appointment, DbError>> + Send;

    fn find_appointment(
        &self,
        tenant: &TenantContext,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Appointment>, DbError>> + Send;

    fn list_appointments(
        &self,
        tenant: &TenantContext,
        filter: &AppointmentFilter,
    ) -> impl std::future::Future<Output = Result<Vec<Appointment>, DbError>> + Send;

    /// Every appointment of one professional on one date, any status, ordered by start.
    fn list_appointments_for_day(
        &self,
        tenant: &TenantContext,
        professional_id: i64,
        date: NaiveDate,
    ) -> impl std::future::Future<Output = Result<Vec<Appointment>, DbError>> + Send;

    /// Returns the updated row, or `None` when the id is unknown for the tenant.
    fn update_appointment_status(
        &self,
        tenant: &TenantContext,
        id: i64,
        status: AppointmentStatus,
    ) -> impl std::future::Future<Output = Result<Option<Appointment>, DbError>> + Send;
}

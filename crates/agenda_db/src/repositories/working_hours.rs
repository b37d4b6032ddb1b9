//! Repository for weekly working-hours templates

use crate::error::DbError;
use agenda_common::models::{DayOfWeek, WorkingHours};
use agenda_common::TenantContext;

pub trait WorkingHoursRepository {
    /// Insert or replace the row for `(professional, day)`.
    fn upsert_working_hours(
        &self,
        tenant: &TenantContext,
        hours: WorkingHours,
    ) -> impl std::future::Future<Output = Result<WorkingHours, DbError>> + Send;

    /// The row for one weekday, active or not.
    fn find_working_hours(
        &self,
        tenant: &TenantContext,
        professional_id: i64,
        day: DayOfWeek,
    ) -> impl std::future::Future<Output = Result<Option<WorkingHours>, DbError>> + Send;

    /// All rows of a professional ordered Monday to Sunday.
    fn list_working_hours(
        &self,
        tenant: &TenantContext,
        professional_id: i64,
        active_only: bool,
    ) -> impl std::future::Future<Output = Result<Vec<WorkingHours>, DbError>> + Send;
}

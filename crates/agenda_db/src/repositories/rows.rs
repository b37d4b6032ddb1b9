// Row <-> model conversions shared by the SQL repositories.

use crate::error::DbError;
use agenda_common::models::{Appointment, AppointmentStatus, DayOfWeek, ScheduleWindow, WorkingHours};
use chrono::NaiveDate;
use sqlx::any::AnyRow;
use sqlx::Row;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn date_to_sql(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn date_from_sql(raw: &str) -> Result<NaiveDate, DbError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| DbError::InvalidData(format!("bad date '{}': {}", raw, e)))
}

pub(crate) const APPOINTMENT_COLUMNS: &str = "id, service_id, professional_id, client_id, \
     client_name, client_phone, date, start_time, end_time, status, amount_paid, amount_due, notes";

pub(crate) fn appointment_from_row(row: &AnyRow) -> Result<Appointment, DbError> {
    let date: String = row.try_get("date")?;
    let status: String = row.try_get("status")?;
    Ok(Appointment {
        id: row.try_get("id")?,
        service_id: row.try_get("service_id")?,
        professional_id: row.try_get("professional_id")?,
        client_id: row.try_get("client_id")?,
        client_name: row.try_get("client_name")?,
        client_phone: row.try_get("client_phone")?,
        date: date_from_sql(&date)?,
        start: row.try_get("start_time")?,
        end: row.try_get("end_time")?,
        status: status
            .parse::<AppointmentStatus>()
            .map_err(DbError::InvalidData)?,
        amount_paid: row.try_get("amount_paid")?,
        amount_due: row.try_get("amount_due")?,
        notes: row.try_get("notes")?,
    })
}

pub(crate) const WINDOW_COLUMNS: &str = "id, professional_id, date, start_time, end_time, reason";

pub(crate) fn window_from_row(row: &AnyRow) -> Result<ScheduleWindow, DbError> {
    let date: String = row.try_get("date")?;
    Ok(ScheduleWindow {
        id: row.try_get("id")?,
        professional_id: row.try_get("professional_id")?,
        date: date_from_sql(&date)?,
        start: row.try_get("start_time")?,
        end: row.try_get("end_time")?,
        reason: row.try_get("reason")?,
    })
}

pub(crate) const WORKING_HOURS_COLUMNS: &str = "professional_id, day_of_week, morning_start, \
     morning_end, afternoon_start, afternoon_end, active";

pub(crate) fn working_hours_from_row(row: &AnyRow) -> Result<WorkingHours, DbError> {
    let day: String = row.try_get("day_of_week")?;
    // Stored as INTEGER so every backend decodes it the same way
    let active: i64 = row.try_get("active")?;
    Ok(WorkingHours {
        professional_id: row.try_get("professional_id")?,
        day_of_week: day.parse::<DayOfWeek>().map_err(DbError::InvalidData)?,
        morning_start: row.try_get("morning_start")?,
        morning_end: row.try_get("morning_end")?,
        afternoon_start: row.try_get("afternoon_start")?,
        afternoon_end: row.try_get("afternoon_end")?,
        active: active != 0,
    })
}

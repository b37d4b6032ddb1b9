// --- File: crates/agenda_common/src/models.rs ---
//! Persisted schedule data shared by the store and the scheduling core.
//!
//! Times of day travel as `"HH:MM"` strings exactly as they are stored; the scheduling
//! crate parses them when it computes.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Day of the week a working-hours row applies to.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown day of week: {}", s))
    }
}

/// Weekly template row for one professional and weekday.
///
/// Each session is a nullable pair; `None`/`None` means the session does not exist.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    pub professional_id: i64,
    pub day_of_week: DayOfWeek,
    pub morning_start: Option<String>,
    pub morning_end: Option<String>,
    pub afternoon_start: Option<String>,
    pub afternoon_end: Option<String>,
    pub active: bool,
}

/// A dated window attached to one professional: overtime or a block.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWindow {
    pub id: i64,
    pub professional_id: i64,
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
    pub reason: Option<String>,
}

/// Ad-hoc extension of bookable hours for one date.
pub type OvertimeWindow = ScheduleWindow;
/// Ad-hoc removal of availability for one date.
pub type BlockedWindow = ScheduleWindow;

/// Input for creating an overtime or blocked window.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduleWindow {
    pub professional_id: i64,
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Whether an appointment in this status occupies its time range.
    pub fn holds_slot(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(format!("unknown appointment status: {}", other)),
        }
    }
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub service_id: i64,
    pub professional_id: i64,
    /// Walk-in clients have no id, only a name and phone.
    pub client_id: Option<i64>,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
    pub status: AppointmentStatus,
    pub amount_paid: f64,
    pub amount_due: f64,
    pub notes: Option<String>,
}

/// Client-supplied part of a booking.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub service_id: i64,
    #[serde(default)]
    pub client_id: Option<i64>,
    pub client_name: String,
    #[serde(default)]
    pub client_phone: Option<String>,
    #[serde(default)]
    pub amount_paid: f64,
    #[serde(default)]
    pub amount_due: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Row handed to the store by the booking path; status is always pending on insert.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub professional_id: i64,
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
    pub draft: AppointmentDraft,
}

/// Structured filter for appointment listings. Empty fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentFilter {
    pub professional_id: Option<i64>,
    pub client_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub statuses: Vec<AppointmentStatus>,
    /// Oldest first when set, newest first otherwise.
    pub ascending: bool,
}

/// Linked external-calendar credentials of one professional.
#[derive(Clone, PartialEq)]
pub struct CalendarCredentials {
    pub professional_id: i64,
    pub refresh_token: String,
}

impl fmt::Debug for CalendarCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarCredentials")
            .field("professional_id", &self.professional_id)
            .field("refresh_token", &"***")
            .finish()
    }
}

//! Which appointments need a reminder.

use agenda_common::models::{AppointmentFilter, AppointmentStatus};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::warn;

/// Parses an IANA zone name, falling back to UTC.
pub fn business_zone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|_| {
        warn!("Unknown time zone '{}', using UTC", name);
        Tz::UTC
    })
}

/// The calendar date after `now` as seen in `zone`.
pub fn tomorrow_in(zone: Tz, now: DateTime<Utc>) -> Option<NaiveDate> {
    now.with_timezone(&zone).date_naive().succ_opt()
}

/// Pending or confirmed appointments on `date`, earliest first.
pub fn reminder_filter(date: NaiveDate) -> AppointmentFilter {
    AppointmentFilter {
        date: Some(date),
        statuses: vec![AppointmentStatus::Pending, AppointmentStatus::Confirmed],
        ascending: true,
        ..AppointmentFilter::default()
    }
}

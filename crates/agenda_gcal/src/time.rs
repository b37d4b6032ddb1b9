//! Local wall-clock event times to UTC instants.

use crate::error::GcalPushError;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

pub fn parse_zone(name: &str) -> Result<Tz, GcalPushError> {
    name.parse::<Tz>()
        .map_err(|_| GcalPushError::TimeParseError(format!("unknown time zone '{}'", name)))
}

/// Converts `YYYY-MM-DDTHH:MM[:SS]` in `zone` to UTC.
///
/// Hours may run past 23 and roll into the next day. A wall-clock time skipped by a DST
/// jump is an error; an ambiguous one resolves to the earlier instant.
pub fn local_to_utc(local: &str, zone: Tz) -> Result<DateTime<Utc>, GcalPushError> {
    let bad = || GcalPushError::TimeParseError(format!("invalid local time '{}'", local));

    let (date, time) = local.split_once('T').ok_or_else(bad)?;
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| bad())?;
    let mut parts = time.split(':');
    let hours: i64 = parts.next().and_then(|h| h.parse().ok()).ok_or_else(bad)?;
    let minutes: i64 = parts.next().and_then(|m| m.parse().ok()).ok_or_else(bad)?;
    let seconds: i64 = match parts.next() {
        Some(s) => s.parse().map_err(|_| bad())?,
        None => 0,
    };
    if parts.next().is_some() || minutes >= 60 || seconds >= 60 || hours < 0 {
        return Err(bad());
    }

    let naive = date.and_hms_opt(0, 0, 0).ok_or_else(bad)?
        + Duration::seconds(hours * 3600 + minutes * 60 + seconds);
    zone.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            GcalPushError::TimeParseError(format!("'{}' does not exist in {}", local, zone))
        })
}

//! `HH:MM` strings to minutes since midnight and back.

use crate::error::SchedulingError;
use std::fmt;

/// Parses `"HH:MM"` into minutes since midnight.
///
/// Hours are not capped (`"24:00"` is the end of the day); minutes must be below 60.
pub fn to_minutes(hhmm: &str) -> Result<i32, SchedulingError> {
    let malformed = || SchedulingError::Parse(format!("expected HH:MM, got '{}'", hhmm));

    let (hours, minutes) = hhmm.trim().split_once(':').ok_or_else(malformed)?;
    if hours.is_empty()
        || minutes.is_empty()
        || minutes.contains(':')
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }
    let hours: i32 = hours.parse().map_err(|_| malformed())?;
    let minutes: i32 = minutes.parse().map_err(|_| malformed())?;
    if minutes >= 60 {
        return Err(malformed());
    }
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(malformed)
}

/// Formats minutes since midnight as zero-padded `"HH:MM"`.
///
/// Values past midnight are not wrapped: 1500 renders as `"25:00"`.
pub fn to_clock(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Re-renders a time in canonical zero-padded form (`"9:5"` becomes `"09:05"`).
pub fn canonical(hhmm: &str) -> Result<String, SchedulingError> {
    to_minutes(hhmm).map(to_clock)
}

/// Half-open `[start, end)` range in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeWindow {
    pub start: i32,
    pub end: i32,
}

impl TimeWindow {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Parses both ends; rejects empty or inverted windows.
    pub fn parse(start: &str, end: &str) -> Result<Self, SchedulingError> {
        let window = Self::new(to_minutes(start)?, to_minutes(end)?);
        if window.start >= window.end {
            return Err(SchedulingError::Validation(format!(
                "start {} must be before end {}",
                start, end
            )));
        }
        Ok(window)
    }

    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `minute` falls inside `[start, end)`.
    pub fn contains(&self, minute: i32) -> bool {
        self.start <= minute && minute < self.end
    }

    pub fn len(&self) -> i32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", to_clock(self.start), to_clock(self.end))
    }
}

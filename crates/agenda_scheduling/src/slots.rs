//! Fixed-length slot grids over opening windows.

use crate::error::SchedulingError;
use crate::time::{to_clock, to_minutes, TimeWindow};
use agenda_common::models::WorkingHours;
use serde::{Serialize, Serializer};
use tracing::warn;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Where a slot came from. Regular sorts before overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SlotOrigin {
    Regular,
    Overtime,
}

/// A candidate appointment time. Computed per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Slot {
    #[serde(serialize_with = "serialize_clock")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "09:00"))]
    pub start: i32,
    #[serde(serialize_with = "serialize_clock")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "10:00"))]
    pub end: i32,
    pub origin: SlotOrigin,
}

impl Slot {
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start, self.end)
    }
}

/// Renders minutes since midnight as `"HH:MM"`.
pub(crate) fn serialize_clock<S: Serializer>(
    minutes: &i32,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_clock(*minutes))
}

/// Cuts `window` into back-to-back slots of `duration` minutes.
///
/// Starts at `window.start`; a trailing remainder shorter than `duration` is dropped.
pub fn generate_slots(
    window: TimeWindow,
    duration: i64,
    origin: SlotOrigin,
) -> Result<Vec<Slot>, SchedulingError> {
    if duration <= 0 {
        return Err(SchedulingError::InvalidDuration(duration));
    }
    // Longer than any day; nothing fits
    let Ok(step) = i32::try_from(duration) else {
        return Ok(Vec::new());
    };
    if window.is_empty() {
        return Ok(Vec::new());
    }

    let capacity = (window.len() / step) as usize;
    let mut slots = Vec::with_capacity(capacity);
    let mut start = window.start;
    while let Some(end) = start.checked_add(step).filter(|end| *end <= window.end) {
        slots.push(Slot { start, end, origin });
        start = end;
    }
    Ok(slots)
}

/// The opening windows of one template row, morning first.
///
/// A half-configured pair is ignored with a warning, as is an inactive day.
pub fn sessions(hours: &WorkingHours) -> Result<Vec<TimeWindow>, SchedulingError> {
    if !hours.active {
        return Ok(Vec::new());
    }
    let mut windows = Vec::with_capacity(2);
    for (label, start, end) in [
        ("morning", &hours.morning_start, &hours.morning_end),
        ("afternoon", &hours.afternoon_start, &hours.afternoon_end),
    ] {
        match (start, end) {
            (Some(start), Some(end)) => {
                windows.push(TimeWindow::new(to_minutes(start)?, to_minutes(end)?))
            }
            (None, None) => {}
            _ => warn!(
                "Ignoring half-configured {} session for professional {} on {}",
                label, hours.professional_id, hours.day_of_week
            ),
        }
    }
    Ok(windows)
}

/// The inter-session gap between morning end and afternoon start, when both exist.
pub fn lunch_gap(hours: &WorkingHours) -> Result<Option<TimeWindow>, SchedulingError> {
    if !hours.active {
        return Ok(None);
    }
    let (Some(_), Some(morning_end), Some(afternoon_start), Some(_)) = (
        &hours.morning_start,
        &hours.morning_end,
        &hours.afternoon_start,
        &hours.afternoon_end,
    ) else {
        return Ok(None);
    };
    let gap = TimeWindow::new(to_minutes(morning_end)?, to_minutes(afternoon_start)?);
    Ok((!gap.is_empty()).then_some(gap))
}

/// Regular slots for a day: one generator call per session, never across the gap.
pub fn regular_slots(hours: &WorkingHours, duration: i64) -> Result<Vec<Slot>, SchedulingError> {
    if duration <= 0 {
        return Err(SchedulingError::InvalidDuration(duration));
    }
    let mut slots = Vec::new();
    for window in sessions(hours)? {
        slots.extend(generate_slots(window, duration, SlotOrigin::Regular)?);
    }
    Ok(slots)
}

//! Availability filter and the admin day view.
//!
//! [`compute_availability`] answers "what can a client book"; [`DaySchedule`] answers
//! "what does the day look like" for the admin agenda. Both use the same candidate list,
//! block test and overlap test, so a slot is offered to clients exactly when the day view
//! classifies it as `free` or `overtime-free`.

use crate::error::SchedulingError;
use crate::slots::{generate_slots, serialize_clock, Slot, SlotOrigin};
use crate::time::{to_minutes, TimeWindow};
use agenda_common::models::{Appointment, ScheduleWindow};
use serde::Serialize;
use tracing::debug;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

fn window_of(window: &ScheduleWindow) -> Result<TimeWindow, SchedulingError> {
    Ok(TimeWindow::new(
        to_minutes(&window.start)?,
        to_minutes(&window.end)?,
    ))
}

fn parse_windows(
    windows: &[ScheduleWindow],
) -> Result<Vec<(TimeWindow, &ScheduleWindow)>, SchedulingError> {
    windows
        .iter()
        .map(|w| window_of(w).map(|range| (range, w)))
        .collect()
}

/// Appointments that still occupy their time range, with parsed ranges.
fn live_appointments(
    appointments: &[Appointment],
) -> Result<Vec<(TimeWindow, &Appointment)>, SchedulingError> {
    appointments
        .iter()
        .filter(|a| a.status.holds_slot())
        .map(|a| {
            Ok((
                TimeWindow::new(to_minutes(&a.start)?, to_minutes(&a.end)?),
                a,
            ))
        })
        .collect()
}

/// Regular plus overtime slots, ordered by start with regular first on ties.
///
/// Overlapping regular and overtime entries are both kept.
pub fn candidate_slots(
    regular_slots: &[Slot],
    overtime_windows: &[ScheduleWindow],
    duration: i64,
) -> Result<Vec<Slot>, SchedulingError> {
    if duration <= 0 {
        return Err(SchedulingError::InvalidDuration(duration));
    }
    let mut candidates = regular_slots.to_vec();
    for window in overtime_windows {
        candidates.extend(generate_slots(
            window_of(window)?,
            duration,
            SlotOrigin::Overtime,
        )?);
    }
    candidates.sort_by_key(|slot| (slot.start, slot.origin));
    Ok(candidates)
}

/// Slots a client may book.
///
/// Overtime windows are expanded like regular hours, slots starting inside a block are
/// removed, and slots overlapping a non-cancelled appointment are excluded.
pub fn compute_availability(
    regular_slots: &[Slot],
    overtime_windows: &[ScheduleWindow],
    blocked_windows: &[ScheduleWindow],
    appointments: &[Appointment],
    duration: i64,
) -> Result<Vec<Slot>, SchedulingError> {
    let candidates = candidate_slots(regular_slots, overtime_windows, duration)?;
    let blocks = parse_windows(blocked_windows)?;
    let booked = live_appointments(appointments)?;

    let available: Vec<Slot> = candidates
        .into_iter()
        .filter(|slot| !blocks.iter().any(|(block, _)| block.contains(slot.start)))
        .filter(|slot| {
            let range = slot.window();
            !booked.iter().any(|(taken, _)| taken.overlaps(&range))
        })
        .collect();

    debug!(
        "{} slots available ({} blocks, {} live appointments)",
        available.len(),
        blocks.len(),
        booked.len()
    );
    Ok(available)
}

/// Occupancy of one entry in the admin day view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum SlotState {
    /// Inter-session gap.
    Closed,
    Booked { appointment: Box<Appointment> },
    Blocked { reason: Option<String> },
    OvertimeFree,
    Free,
}

impl SlotState {
    /// Whether a client could take this entry.
    pub fn is_bookable(&self) -> bool {
        matches!(self, SlotState::Free | SlotState::OvertimeFree)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    #[serde(serialize_with = "serialize_clock")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "09:00"))]
    pub start: i32,
    #[serde(serialize_with = "serialize_clock")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "09:30"))]
    pub end: i32,
    /// `None` for the synthetic gap entry.
    pub origin: Option<SlotOrigin>,
    #[serde(flatten)]
    pub state: SlotState,
}

impl DayEntry {
    pub fn slot(&self) -> Option<Slot> {
        self.origin.map(|origin| Slot {
            start: self.start,
            end: self.end,
            origin,
        })
    }
}

/// Every slot of a day with its classification, plus the lunch gap.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct DaySchedule {
    pub entries: Vec<DayEntry>,
}

impl DaySchedule {
    /// Classifies each candidate slot: booked, then blocked, then overtime-free, then free.
    ///
    /// `gap` becomes a single `closed` entry. Overtime slots inside the gap are classified
    /// on their own.
    pub fn build(
        regular_slots: &[Slot],
        gap: Option<TimeWindow>,
        overtime_windows: &[ScheduleWindow],
        blocked_windows: &[ScheduleWindow],
        appointments: &[Appointment],
        duration: i64,
    ) -> Result<Self, SchedulingError> {
        let candidates = candidate_slots(regular_slots, overtime_windows, duration)?;
        let blocks = parse_windows(blocked_windows)?;
        let booked = live_appointments(appointments)?;

        let mut entries: Vec<DayEntry> = candidates
            .into_iter()
            .map(|slot| DayEntry {
                start: slot.start,
                end: slot.end,
                origin: Some(slot.origin),
                state: classify(&slot, &blocks, &booked),
            })
            .collect();

        if let Some(gap) = gap {
            entries.push(DayEntry {
                start: gap.start,
                end: gap.end,
                origin: None,
                state: SlotState::Closed,
            });
        }
        // Gap sorts ahead of a slot starting at the same minute
        entries.sort_by_key(|entry| (entry.start, entry.origin));

        Ok(Self { entries })
    }

    /// The entries a client could book, in day order.
    pub fn available(&self) -> Vec<Slot> {
        self.entries
            .iter()
            .filter(|entry| entry.state.is_bookable())
            .filter_map(DayEntry::slot)
            .collect()
    }
}

fn classify(
    slot: &Slot,
    blocks: &[(TimeWindow, &ScheduleWindow)],
    booked: &[(TimeWindow, &Appointment)],
) -> SlotState {
    let range = slot.window();
    if let Some((_, appointment)) = booked.iter().find(|(taken, _)| taken.overlaps(&range)) {
        return SlotState::Booked {
            appointment: Box::new((*appointment).clone()),
        };
    }
    if let Some((_, block)) = blocks.iter().find(|(b, _)| b.contains(slot.start)) {
        return SlotState::Blocked {
            reason: block.reason.clone(),
        };
    }
    match slot.origin {
        SlotOrigin::Overtime => SlotState::OvertimeFree,
        SlotOrigin::Regular => SlotState::Free,
    }
}

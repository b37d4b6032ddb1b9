// Declare modules within this crate
pub mod availability;
pub mod booking;
pub mod day;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod reminders;
pub mod routes;
pub mod slots;
#[cfg(test)]
mod slots_proptest;
#[cfg(test)]
mod slots_test;
pub mod sync;
pub mod time;
#[cfg(test)]
mod time_test;
pub mod working_hours;

pub use availability::{compute_availability, DayEntry, DaySchedule, SlotState};
pub use booking::BookingTransactor;
pub use day::DayInputs;
pub use error::SchedulingError;
pub use slots::{generate_slots, Slot, SlotOrigin};
pub use sync::{spawn_calendar_sync_worker, CalendarSyncJob, CalendarSyncQueue};
pub use time::{to_clock, to_minutes, TimeWindow};

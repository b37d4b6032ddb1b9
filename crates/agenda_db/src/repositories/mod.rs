//! Repository traits of the schedule store and their SQL implementations.

pub mod appointment_filter;
pub mod appointments;
pub mod appointments_sql;
pub mod calendar_credentials;
pub mod calendar_credentials_sql;
pub mod schedule_windows;
pub mod schedule_windows_sql;
pub mod working_hours;
pub mod working_hours_sql;

mod rows;

pub use appointments::AppointmentRepository;
pub use calendar_credentials::CalendarCredentialsRepository;
pub use schedule_windows::{ScheduleWindowRepository, WindowKind};
pub use working_hours::WorkingHoursRepository;

// Declare modules within this crate
pub mod auth;
pub mod error;
pub mod service;
pub mod time;

pub use error::GcalPushError;
pub use service::GoogleCalendarPush;

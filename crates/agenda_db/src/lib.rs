//! Schedule store for the agenda service
//!
//! Persists weekly templates, overtime and blocked windows, appointments and linked
//! calendar credentials through SQLx's `Any` driver. SQLite is the default backend;
//! PostgreSQL and MySQL are available through feature flags.
//!
//! Every repository method takes a [`TenantContext`](agenda_common::TenantContext) and
//! scopes its SQL by `business_id`.
//!
//! # Example
//!
//! ```rust,no_run
//! use agenda_db::{DbClient, SqlScheduleStore};
//!
//! async fn setup_store() -> Result<SqlScheduleStore, agenda_db::error::DbError> {
//!     let db_client = DbClient::from_url("sqlite://data/agenda.db").await?;
//!     let store = SqlScheduleStore::new(db_client);
//!     store.init_schema().await?;
//!     Ok(store)
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;
pub mod store;

#[cfg(test)]
mod store_test;

pub use client::{DbClient, DbTransaction};
pub use error::DbError;
pub use repositories::{
    AppointmentRepository, CalendarCredentialsRepository, ScheduleWindowRepository, WindowKind,
    WorkingHoursRepository,
};
pub use store::{ScheduleStore, SqlScheduleStore};

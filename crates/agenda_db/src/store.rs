//! SQL schedule store
//!
//! One struct implements every repository trait; the scheduling crate is generic over
//! [`ScheduleStore`] so tests and other backends can plug in.

use crate::error::DbError;
use crate::repositories::{
    AppointmentRepository, CalendarCredentialsRepository, ScheduleWindowRepository,
    WorkingHoursRepository,
};
use crate::DbClient;
use tracing::{debug, info};

/// Everything the scheduling core needs from persistence.
pub trait ScheduleStore:
    WorkingHoursRepository
    + ScheduleWindowRepository
    + AppointmentRepository
    + CalendarCredentialsRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> ScheduleStore for T where
    T: WorkingHoursRepository
        + ScheduleWindowRepository
        + AppointmentRepository
        + CalendarCredentialsRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS working_hours (
        business_id INTEGER NOT NULL,
        professional_id INTEGER NOT NULL,
        day_of_week TEXT NOT NULL,
        morning_start TEXT,
        morning_end TEXT,
        afternoon_start TEXT,
        afternoon_end TEXT,
        active INTEGER NOT NULL DEFAULT 1,
        UNIQUE(business_id, professional_id, day_of_week)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS overtime_windows (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        business_id INTEGER NOT NULL,
        professional_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL,
        reason TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS blocked_windows (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        business_id INTEGER NOT NULL,
        professional_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL,
        reason TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS appointments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        business_id INTEGER NOT NULL,
        service_id INTEGER NOT NULL,
        professional_id INTEGER NOT NULL,
        client_id INTEGER,
        client_name TEXT NOT NULL,
        client_phone TEXT,
        date TEXT NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'pending',
        amount_paid REAL NOT NULL DEFAULT 0,
        amount_due REAL NOT NULL DEFAULT 0,
        notes TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    // Cancelled rows release their slot
    r#"
    CREATE UNIQUE INDEX IF NOT EXISTS ux_appointments_live_slot
        ON appointments (business_id, professional_id, date, start_time)
        WHERE status <> 'cancelled'
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS ix_appointments_day
        ON appointments (business_id, date)
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS ix_overtime_day
        ON overtime_windows (business_id, professional_id, date)
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS ix_blocked_day
        ON blocked_windows (business_id, professional_id, date)
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS calendar_credentials (
        business_id INTEGER NOT NULL,
        professional_id INTEGER NOT NULL,
        refresh_token TEXT NOT NULL,
        UNIQUE(business_id, professional_id)
    )
    "#,
];

#[derive(Debug, Clone)]
pub struct SqlScheduleStore {
    pub(crate) db_client: DbClient,
}

impl SqlScheduleStore {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    pub fn db_client(&self) -> &DbClient {
        &self.db_client
    }

    /// Creates tables and indexes that do not exist yet.
    pub async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing schedule store schema");
        for statement in SCHEMA {
            self.db_client.execute(statement).await?;
        }
        info!("Schedule store schema initialized successfully");
        Ok(())
    }
}

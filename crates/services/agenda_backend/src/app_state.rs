// --- File: crates/services/agenda_backend/src/app_state.rs ---
use crate::service_factory::{calendar_push, calendar_time_zone};
use agenda_config::{AppConfig, ConfigLoadError};
use agenda_db::{DbClient, DbError, SqlScheduleStore};
use agenda_scheduling::handlers::SchedulingState;
use agenda_scheduling::{spawn_calendar_sync_worker, BookingTransactor};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::info;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("Missing [database] section in config")]
    MissingDatabase,
    #[error("Failed to open schedule store: {0}")]
    Database(#[from] DbError),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state that is shared across all routes.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub scheduling: Arc<SchedulingState>,
    /// Finishes once every route holding the sync queue is dropped.
    pub sync_worker: JoinHandle<()>,
}

impl AppState {
    /// Opens the store, creates the schema and starts the calendar sync worker.
    pub async fn build(config: Arc<AppConfig>) -> Result<Self, StartupError> {
        let db_config = config
            .database
            .as_ref()
            .ok_or(StartupError::MissingDatabase)?;
        let db_client = DbClient::from_config(db_config).await?;
        info!("Schedule store at {}", db_client);

        let store = SqlScheduleStore::new(db_client);
        store.init_schema().await?;

        let (queue, sync_worker) = spawn_calendar_sync_worker(
            store.clone(),
            calendar_push(&config),
            calendar_time_zone(&config),
        );

        let scheduling = Arc::new(SchedulingState {
            config: config.clone(),
            booking: BookingTransactor::with_sync(store.clone(), queue),
            store,
        });

        Ok(Self {
            config,
            scheduling,
            sync_worker,
        })
    }
}

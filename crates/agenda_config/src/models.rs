// --- File: crates/agenda_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Time zone used when none is configured.
pub const DEFAULT_TIME_ZONE: &str = "America/Argentina/Buenos_Aires";
/// Grid used by the admin day view when the request does not name a duration.
pub const DEFAULT_ADMIN_GRID_MINUTES: i64 = 30;
/// Pool size used when `database.max_connections` is absent.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g. AGENDA__DATABASE__URL
    #[serde(default)]
    pub max_connections: Option<u32>,
}

impl DatabaseConfig {
    pub fn max_connections(&self) -> u32 {
        self.max_connections
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }
}

// --- Google Calendar Config ---
// client_secret is normally the "secret_from_env" marker, resolved from GCAL_CLIENT_SECRET.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GcalConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub calendar_id: Option<String>,
    pub time_zone: Option<String>,
}

impl GcalConfig {
    pub fn calendar_id(&self) -> &str {
        self.calendar_id.as_deref().unwrap_or("primary")
    }
}

// --- Scheduling Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SchedulingConfig {
    /// IANA name of the business time zone ("tomorrow" for reminders, calendar events).
    pub time_zone: Option<String>,
    /// Slot length of the admin day view when no duration is requested.
    pub admin_grid_minutes: Option<i64>,
}

impl SchedulingConfig {
    pub fn time_zone(&self) -> &str {
        self.time_zone.as_deref().unwrap_or(DEFAULT_TIME_ZONE)
    }

    pub fn admin_grid_minutes(&self) -> i64 {
        self.admin_grid_minutes
            .unwrap_or(DEFAULT_ADMIN_GRID_MINUTES)
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gcal: bool,

    // --- Optional Sections ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
    #[serde(default)]
    pub scheduling: Option<SchedulingConfig>,
}

impl AppConfig {
    /// Scheduling section, falling back to defaults when it is missing.
    pub fn scheduling(&self) -> SchedulingConfig {
        self.scheduling.clone().unwrap_or_default()
    }
}

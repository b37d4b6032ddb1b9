// --- File: crates/agenda_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP error rendering
pub mod logging; // Logging utilities
pub mod models; // Persisted schedule data
pub mod services; // Service abstractions
pub mod tenant; // Request-scoped tenant context

// Re-export error types and utilities for easier access
pub use error::{
    conflict, internal_error, not_found, validation_error, AgendaError, Context, HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::IntoHttpResponse;

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error, log_result};

pub use tenant::TenantContext;

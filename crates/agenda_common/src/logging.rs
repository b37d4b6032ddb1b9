//! Logging utilities for the agenda service.
//!
//! Every crate logs through `tracing`; this module installs the subscriber once at
//! process start.

use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Targets that receive the default directive.
const CRATE_TARGETS: [&str; 6] = [
    "agenda_backend",
    "agenda_common",
    "agenda_config",
    "agenda_db",
    "agenda_gcal",
    "agenda_scheduling",
];

/// Initialize the tracing subscriber at INFO.
///
/// ```
/// use agenda_common::logging;
///
/// logging::init();
/// logging::init_with_level(tracing::Level::DEBUG); // no-op, already installed
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level for the workspace crates.
///
/// `RUST_LOG` is honoured for everything else. Calling it twice is harmless.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for target in CRATE_TARGETS {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be chained.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}

// --- File: crates/agenda_config/src/lib.rs ---
use config::{Config, Environment, File};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

pub mod models;
pub use models::*;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("Failed to resolve secret markers: {0}")]
    Secrets(#[from] serde_json::Error),
}

/// Loads the application configuration.
///
/// Sources, later ones winning:
/// 1. `{CONFIG_DIR}/default.*`
/// 2. `{CONFIG_DIR}/{RUN_ENV}.*`
/// 3. environment variables `{PREFIX}__SECTION__KEY` (prefix defaults to `AGENDA`)
///
/// Afterwards every `"secret_from_env"` string is replaced from the environment.
pub fn load_config() -> Result<AppConfig, ConfigLoadError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "AGENDA".to_string());
    let config_dir = PathBuf::from(env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string()));

    load_config_from(&config_dir, &run_env, &prefix)
}

/// Same as [`load_config`] with every location given explicitly.
pub fn load_config_from(
    config_dir: &std::path::Path,
    run_env: &str,
    prefix: &str,
) -> Result<AppConfig, ConfigLoadError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    debug!("config: default_path: {}", default_path.display());
    debug!("config: env_path: {}", env_path.display());

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_overrides_from_marker(raw_config)
}

/// Recursively replaces all "secret_from_env" string values with environment variable values
fn inject_env_secrets(value: &mut Value) {
    fn walk(path: Vec<String>, obj: &mut Value) {
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    let mut new_path = path.clone();
                    new_path.push(k.to_string());
                    walk(new_path, v);
                }
            }
            Value::String(s) if s == "secret_from_env" => {
                let env_key = path.join("_").to_uppercase();
                match std::env::var(&env_key) {
                    Ok(env_val) => *obj = Value::String(env_val),
                    Err(_) => {
                        warn!("env var {} not found for secret_from_env", env_key);
                        *obj = Value::Null;
                    }
                }
            }
            _ => {}
        }
    }

    walk(vec![], value);
}

/// Applies environment overrides based on "secret_from_env" markers in serialized config.
///
/// A marker without a matching variable becomes `None`.
pub fn apply_env_overrides_from_marker(config: AppConfig) -> Result<AppConfig, ConfigLoadError> {
    let mut json = serde_json::to_value(&config)?;
    inject_env_secrets(&mut json);
    Ok(serde_json::from_value(json)?)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file once per process.
///
/// `DOTENV_OVERRIDE` wins, then a first CLI argument starting with `.env`, then `.env`.
/// Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = std::env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &std::path::Path, name: &str, body: &str) {
        let mut f = std::fs::File::create(dir.join(name)).unwrap();
        f.write_all(body.as_bytes()).unwrap();
    }

    #[test]
    fn loads_layers_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "default.toml",
            "[server]\nhost = \"0.0.0.0\"\nport = 8000\n[scheduling]\nadmin_grid_minutes = 15\n",
        );
        write_file(dir.path(), "staging.toml", "[server]\nhost = \"0.0.0.0\"\nport = 9000\n");

        let cfg = load_config_from(dir.path(), "staging", "AGENDA_LAYER_TEST").unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert!(!cfg.use_gcal);
        assert!(cfg.database.is_none());
        assert_eq!(cfg.scheduling().admin_grid_minutes(), 15);
        assert_eq!(cfg.scheduling().time_zone(), DEFAULT_TIME_ZONE);
    }

    #[test]
    fn secret_marker_without_env_becomes_none() {
        let cfg = AppConfig {
            server: ServerConfig {
                host: "localhost".into(),
                port: 1,
            },
            use_gcal: true,
            database: None,
            gcal: Some(GcalConfig {
                client_id: Some("id".into()),
                client_secret: Some("secret_from_env".into()),
                calendar_id: None,
                time_zone: None,
            }),
            scheduling: None,
        };
        // GCAL_CLIENT_SECRET is not expected in the test environment
        if std::env::var("GCAL_CLIENT_SECRET").is_err() {
            let resolved = apply_env_overrides_from_marker(cfg).unwrap();
            let gcal = resolved.gcal.unwrap();
            assert_eq!(gcal.client_secret, None);
            assert_eq!(gcal.client_id.as_deref(), Some("id"));
            assert_eq!(gcal.calendar_id(), "primary");
        }
    }

    #[test]
    fn max_connections_defaults_when_zero_or_missing() {
        let db = DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: Some(0),
        };
        assert_eq!(db.max_connections(), DEFAULT_MAX_CONNECTIONS);
        let db = DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: Some(1),
        };
        assert_eq!(db.max_connections(), 1);
    }
}

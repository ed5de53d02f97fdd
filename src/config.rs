/// Runtime configuration
///
/// Everything comes from the environment; there are no command line flags.

use crate::error::{DeskError, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the database file location
pub const DB_PATH_VAR: &str = "AIRPORT_DESK_DB";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_VAR: &str = "AIRPORT_DESK_LOG";

const DEFAULT_DB_FILE: &str = "airport_management.db";
const DEFAULT_DATA_DIR: &str = ".airport-desk";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// Split out from `from_env` so tests don't have to mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match lookup(DB_PATH_VAR) {
            Some(raw) if raw.trim().is_empty() => {
                return Err(DeskError::Config(format!("{} is set but empty", DB_PATH_VAR)));
            }
            Some(raw) => PathBuf::from(raw),
            None => default_db_path(),
        };

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            db_path,
            log_filter,
        })
    }
}

// ~/.airport-desk/airport_management.db, or the working directory if there's no home
fn default_db_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(DEFAULT_DATA_DIR).join(DEFAULT_DB_FILE),
        None => PathBuf::from(DEFAULT_DB_FILE),
    }
}

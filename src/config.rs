//! Application configuration.
//!
//! Settings come from an optional `config.toml` next to the binary, with the
//! data directory overridable through the `BUDGET_BUDDY_DATA_DIR` environment
//! variable (loaded from `.env` by the binary before this runs). A missing
//! config file is not an error; every field has a default.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "BUDGET_BUDDY_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_LOAD_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory holding the persisted JSON collections
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Artificial delay applied at the end of the initial load, purely to
    /// smooth the loading indicator. Zero disables it.
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_load_delay_ms() -> u64 {
    DEFAULT_LOAD_DELAY_MS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            load_delay_ms: default_load_delay_ms(),
        }
    }
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref)
        .map_err(|e| Error::Config(format!("Failed to read config file {path_ref:?}: {e}")))?;
    toml::from_str(&contents).map_err(|e| {
        Error::Config(format!(
            "Failed to parse TOML from config file {path_ref:?}: {e}"
        ))
    })
}

/// Assembles the effective configuration: `config.toml` if present,
/// defaults otherwise, then environment overrides on top.
///
/// # Errors
/// Returns `Error::Config` only when a config file exists but is unreadable
/// or malformed; its mere absence falls back to defaults.
pub fn load_app_configuration() -> Result<AppConfig> {
    let mut config = if Path::new("config.toml").exists() {
        load_config("config.toml")?
    } else {
        tracing::debug!("No config.toml found, using defaults");
        AppConfig::default()
    };
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        tracing::debug!("Data directory overridden via {}: {}", DATA_DIR_ENV, dir);
        config.data_dir = PathBuf::from(dir);
    }
    Ok(config)
}

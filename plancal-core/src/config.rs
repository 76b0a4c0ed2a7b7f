//! plancal configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HORIZON_MONTHS;
use crate::error::{PlanCalError, PlanCalResult};

static DEFAULT_STORE_PATH: &str = "~/.plancal/events.json";
static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

fn default_horizon_months() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Configuration at ~/.config/plancal/config.toml
///
/// Every key can be overridden with a `PLANCAL_` environment variable,
/// e.g. `PLANCAL_STORE_PATH`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlanCalConfig {
    /// JSON file holding all events
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// How far ahead to expand recurring events that have no end date
    #[serde(default = "default_horizon_months")]
    pub default_horizon_months: u32,

    /// tracing filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PlanCalConfig {
    fn default() -> Self {
        PlanCalConfig {
            store_path: default_store_path(),
            default_horizon_months: default_horizon_months(),
            log_level: default_log_level(),
        }
    }
}

impl PlanCalConfig {
    pub fn config_path() -> PlanCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlanCalError::Config("Could not determine config directory".into()))?
            .join("plancal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented default file on first run.
    pub fn load() -> PlanCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (optional) layered under `PLANCAL_*` environment variables.
    pub fn load_from(path: &Path) -> PlanCalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("PLANCAL").try_parsing(true))
            .build()
            .map_err(|e| PlanCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlanCalError::Config(e.to_string()))
    }

    /// Store path with `~` expanded.
    pub fn store_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.store_path.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PlanCalResult<()> {
        let contents = format!(
            "\
# plancal configuration

# Where events are stored:
# store_path = \"{}\"

# How many months ahead to expand recurring events without an end date:
# default_horizon_months = {}

# Log filter (overridden by RUST_LOG):
# log_level = \"{}\"
",
            DEFAULT_STORE_PATH, DEFAULT_HORIZON_MONTHS, DEFAULT_LOG_LEVEL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlanCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlanCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

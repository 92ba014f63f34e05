use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::warn;

use crate::errors::RecordError;

const DEFAULT_DIR_NAME: &str = ".record_keeper";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_EXPENSES_FILE: &str = "expenses.txt";

/// User-tunable settings shared by the record keeper binaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expenses_file: Option<PathBuf>,
}

/// Returns the application data directory, defaulting to `~/.record_keeper`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("RECORD_KEEPER_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

impl Config {
    /// Loads the configuration; a missing file yields the defaults.
    pub fn load() -> Result<Self, RecordError> {
        Self::load_from(&config_file())
    }

    /// Loads the configuration, falling back to the defaults with a warning
    /// when the file cannot be read or parsed.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring unreadable configuration file: {}", err);
                Self::default()
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self, RecordError> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Path of the expense backing file: the configured override, or
    /// `expenses.txt` in the working directory.
    pub fn expenses_path(&self) -> PathBuf {
        self.expenses_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPENSES_FILE))
    }
}

//! Application configuration.

use crate::consts::app_consts::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DATABASE_FILE, DEFAULT_SPLASH_SECS, LOG_FILE_NAME,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Database file; relative paths resolve against the working directory.
    pub database_path: Option<PathBuf>,
    /// How long the splash screen is shown, in seconds.
    pub splash_secs: u64,
    /// Whether screens paint a dark background.
    pub with_background_color: bool,
    /// Username of the last successful login, used to prefill the login form.
    pub last_username: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            splash_secs: DEFAULT_SPLASH_SECS,
            with_background_color: true,
            last_username: None,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the config file if there is one, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_secs(self.splash_secs)
    }

    /// Picks the database file: explicit override first, then the config
    /// file, then the default file in the working directory.
    pub fn resolve_database_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.database_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_FILE))
    }
}

/// Directory holding the config and log files (`~/.ecostar`).
pub fn get_app_dir() -> Result<PathBuf, io::Error> {
    let home_path = home::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Failed to determine home directory")
    })?;
    Ok(home_path.join(APP_DIR_NAME))
}

pub fn get_config_path() -> Result<PathBuf, io::Error> {
    Ok(get_app_dir()?.join(CONFIG_FILE_NAME))
}

pub fn get_log_path() -> Result<PathBuf, io::Error> {
    Ok(get_app_dir()?.join(LOG_FILE_NAME))
}

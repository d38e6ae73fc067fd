//! Application configuration management.
//!
//! Handles loading, saving, and managing application-wide settings,
//! including where the video catalog is read from.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Name of the catalog file looked up by default.
pub const DEFAULT_CATALOG_FILE: &str = "videos.txt";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog file to load at startup.
    pub catalog_path: PathBuf,
    /// Directory where log files are written.
    #[serde(default = "default_log_directory")]
    pub log_directory: PathBuf,
    /// Verbose console logging.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            log_directory: default_log_directory(),
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location, or create default if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path`, creating it with defaults if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file not found, using defaults");
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                warn!("Failed to save default config: {}", e);
            }
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {e}")))?;

        info!("Loaded config from {}", path.display());
        debug!("Catalog path: {}", config.catalog_path.display());

        Ok(config)
    }

    /// Save configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Configuration(format!(
                    "Failed to create config directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| {
            Error::Configuration(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Update the catalog path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not point at a file.
    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        validate_catalog_path(&path)?;
        self.catalog_path = path;
        info!("Updated catalog path to: {}", self.catalog_path.display());
        Ok(())
    }

    /// Get the path to the config file.
    #[must_use]
    pub fn config_file_path() -> PathBuf {
        config_file_path()
    }
}

/// Get the default catalog path.
#[must_use]
pub fn default_catalog_path() -> PathBuf {
    app_data_dir().join(DEFAULT_CATALOG_FILE)
}

/// Get the default log directory.
#[must_use]
pub fn default_log_directory() -> PathBuf {
    app_data_dir().join("logs")
}

fn app_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vidshelf")
}

fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("vidshelf")
        .join("config.json")
}

/// Check that a catalog path points at an existing file.
fn validate_catalog_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::Configuration(format!(
            "Catalog file does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(Error::Configuration(format!(
            "Catalog path is not a file: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Configuration manager that handles loading and caching config.
#[derive(Debug)]
pub struct ConfigManager {
    config: AppConfig,
    path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager, loading config from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded.
    pub fn new() -> Result<Self> {
        Self::with_path(config_file_path())
    }

    /// Create a config manager backed by a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded.
    pub fn with_path(path: PathBuf) -> Result<Self> {
        let config = AppConfig::load_from(&path)?;
        Ok(Self { config, path })
    }

    /// Get a reference to the current configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Path of the backing config file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Update the catalog path and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid or config cannot be saved.
    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        self.config.set_catalog_path(path)?;
        self.config.save_to(&self.path)
    }

    /// Reset to default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be saved.
    pub fn reset(&mut self) -> Result<()> {
        self.config = AppConfig::default();
        self.config.save_to(&self.path)
    }
}

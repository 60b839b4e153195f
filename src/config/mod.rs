//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `REFLECT` prefix and nested values use `__` as the separator.
//!
//! # Example
//!
//! ```no_run
//! use daily_reflect::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Journal stored at {}", config.storage.state_file().display());
//! ```

mod error;

pub use error::{ConfigError, ValidationError};

use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Storage configuration (journal snapshot location)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Reminder defaults for the notification collaborator
    #[serde(default)]
    pub reminder: ReminderConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads environment variables
    /// with the `REFLECT` prefix, e.g.:
    ///
    /// - `REFLECT__STORAGE__DIR=/home/me/.reflect` -> `storage.dir`
    /// - `REFLECT__REMINDER__HOUR=20` -> `reminder.hour`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("REFLECT")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Validate all configuration sections
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.reminder.validate()?;
        Ok(())
    }
}

/// Where the engine keeps its persisted snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the state file
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// State file name within the directory
    #[serde(default = "default_state_file")]
    pub file: String,
}

impl StorageConfig {
    /// Full path of the snapshot file
    pub fn state_file(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.file)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.dir.trim().is_empty() || self.file.trim().is_empty() {
            return Err(ValidationError::EmptyStoragePath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            file: default_state_file(),
        }
    }
}

/// Default reminder time handed to the notification collaborator
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderConfig {
    /// Hour of day, 0-23
    #[serde(default = "default_reminder_hour")]
    pub hour: u8,

    /// Minute, 0-59
    #[serde(default)]
    pub minute: u8,
}

impl ReminderConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.hour > 23 {
            return Err(ValidationError::InvalidReminderHour);
        }
        if self.minute > 59 {
            return Err(ValidationError::InvalidReminderMinute);
        }
        Ok(())
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            hour: default_reminder_hour(),
            minute: 0,
        }
    }
}

fn default_storage_dir() -> String {
    ".daily-reflect".to_string()
}

fn default_state_file() -> String {
    "state.json".to_string()
}

fn default_reminder_hour() -> u8 {
    9
}

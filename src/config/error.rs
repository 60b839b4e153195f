//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Storage path cannot be empty")]
    EmptyStoragePath,

    #[error("Reminder hour must be 0-23")]
    InvalidReminderHour,

    #[error("Reminder minute must be 0-59")]
    InvalidReminderMinute,
}

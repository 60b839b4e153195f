//! State Storage Port - Interface for persisting engine state.
//!
//! A synchronous string key-value substrate, the engine's only persistence
//! dependency. Adapters may back it with a local file, process memory, or
//! any platform preference store. Every operation in the engine is a
//! discrete user action on a single-threaded event loop, so the port stays
//! synchronous by design.

/// Errors that can occur during state storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to encode snapshot: {0}")]
    EncodeFailed(String),

    #[error("Failed to decode snapshot: {0}")]
    DecodeFailed(String),
}

impl StorageError {
    /// Creates an IO error with context.
    pub fn io(message: impl Into<String>) -> Self {
        StorageError::Io(message.into())
    }
}

/// Well-known storage keys.
///
/// These names are the engine's on-disk contract; renaming one orphans the
/// data previously written under it.
pub mod keys {
    /// JSON array of daily prompt records.
    pub const PROMPTS: &str = "prompts";
    /// JSON-encoded currently selected topic, absent when none.
    pub const CURRENT_TOPIC: &str = "currentTopic";
    /// ISO date the current cycle began, absent when no topic is active.
    pub const WEEK_START_DATE: &str = "weekStartDate";
    /// Core-prompt index chosen at selection time, default 0.
    pub const CORE_PROMPT_INDEX: &str = "corePromptIndex";
    /// Dev/test date override, absent in normal operation.
    pub const SIMULATED_DATE: &str = "simulatedDate";
    /// Unsaved scratch response text, default empty.
    pub const DRAFT_RESPONSE: &str = "draftResponse";
    /// Whether the external reminder collaborator is enabled.
    pub const REMINDER_ENABLED: &str = "reminderEnabled";
    /// Reminder time of day as `HH:MM`.
    pub const REMINDER_TIME: &str = "reminderTime";
}

/// Port for persisting and loading engine state.
pub trait StateStorage: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value under `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Removes every stored key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    fn clear(&self) -> Result<(), StorageError>;
}

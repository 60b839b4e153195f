//! Application layer - The reflection store and its read models.

pub mod insights;
pub mod observer;
pub mod reminder;
pub mod share;
pub mod store;

pub use observer::{JournalEvent, StoreObserver};
pub use reminder::ReminderSettings;
pub use store::{ReflectionStore, StoreSnapshot};

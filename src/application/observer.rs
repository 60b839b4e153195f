//! Change notification for the presentation layer.
//!
//! The store's contract is its synchronous return values; this observer
//! mechanism is an additive wrapper so a reactive UI can refresh without
//! polling. Observers are invoked synchronously, after the mutation has
//! been applied and persisted.

use crate::domain::foundation::DayDate;

/// What just changed in the reflection store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalEvent {
    /// A topic was selected and a fresh cycle started.
    TopicSelected { topic: String },
    /// The active topic was abandoned.
    TopicAbandoned,
    /// A new daily record was created.
    PromptCreated { date: DayDate },
    /// A response was committed for the given day.
    ResponseSaved { date: DayDate },
    /// The response for the given day was cleared.
    ResponseCleared { date: DayDate },
    /// The simulated date moved forward.
    DayAdvanced { to: DayDate },
    /// The draft scratch text changed.
    DraftChanged,
    /// Reminder settings changed.
    ReminderChanged,
    /// The whole journal was reset.
    Reset,
}

/// Observer notified after every successful store mutation.
pub trait StoreObserver: Send + Sync {
    /// Called synchronously once per event.
    fn on_event(&self, event: &JournalEvent);
}

//! DailyPrompt - the persisted reflection record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DayDate, PromptId};
use crate::domain::schedule::PromptSpec;

/// One day's prompt and (optionally) its answer.
///
/// # Invariants
///
/// - At most one record per calendar date in the owning journal
/// - `question`, `topic`, `week_number`, `day_number`, and `day_label` are
///   frozen at creation and never recomputed, even if the topic selection
///   or cycle table later changes
/// - Only `response`/`responded_at` ever mutate, together
///
/// Serialized with camelCase field names so existing journals written by
/// earlier versions of the app keep decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPrompt {
    id: PromptId,
    date: DayDate,
    question: String,
    topic: String,
    week_number: u32,
    day_number: u32,
    day_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    responded_at: Option<DayDate>,
}

impl DailyPrompt {
    /// Creates an unanswered record for `date` from a scheduled spec.
    pub fn from_spec(spec: PromptSpec, date: DayDate) -> Self {
        Self {
            id: PromptId::new(),
            date,
            question: spec.question,
            topic: spec.topic_name,
            week_number: spec.week_number,
            day_number: spec.day_in_cycle,
            day_label: spec.day_label,
            response: None,
            responded_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the record id.
    pub fn id(&self) -> &PromptId {
        &self.id
    }

    /// Returns the calendar date this record is bound to.
    pub fn date(&self) -> DayDate {
        self.date
    }

    /// Returns the question text frozen at creation.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Returns the denormalized topic name.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns the 1-based week number at creation.
    pub fn week_number(&self) -> u32 {
        self.week_number
    }

    /// Returns the 1-7 day position at creation.
    pub fn day_number(&self) -> u32 {
        self.day_number
    }

    /// Returns the denormalized stage label.
    pub fn day_label(&self) -> &str {
        &self.day_label
    }

    /// Returns the committed response, if any.
    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    /// Returns when the response was committed, if it was.
    pub fn responded_at(&self) -> Option<DayDate> {
        self.responded_at
    }

    /// Returns true once a response has been committed.
    pub fn is_answered(&self) -> bool {
        self.response.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Commits a response, stamping the given day.
    pub fn record_response(&mut self, text: impl Into<String>, responded_on: DayDate) {
        self.response = Some(text.into());
        self.responded_at = Some(responded_on);
    }

    /// Clears the response and its timestamp, leaving everything else intact.
    pub fn clear_response(&mut self) {
        self.response = None;
        self.responded_at = None;
    }
}

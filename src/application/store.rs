//! ReflectionStore - the canonical owner of journal state.
//!
//! Single mutable source of truth for the persisted journal, the active
//! topic selection, the draft, the simulated date, and reminder settings.
//! Every operation is a synchronous read or mutation triggered by a
//! discrete user action; the store is constructed once at process start
//! and passed by reference to whichever layer needs it.
//!
//! # Failure Semantics
//!
//! Persistence problems never surface to callers. A corrupt or missing
//! store loads as empty defaults, and a failed write logs a warning while
//! the in-memory state stays authoritative for the rest of the session.

use std::sync::Arc;

use chrono::NaiveTime;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::application::observer::{JournalEvent, StoreObserver};
use crate::application::reminder::ReminderSettings;
use crate::domain::catalog::Topic;
use crate::domain::foundation::{DayDate, PromptId};
use crate::domain::journal::{ActiveSelection, DailyPrompt};
use crate::domain::schedule::{cycle_position, schedule};
use crate::ports::{keys, StateStorage};

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub current_prompt: Option<DailyPrompt>,
    pub current_topic: Option<Topic>,
    pub day_in_cycle: u32,
    pub draft: String,
    pub answered: Vec<DailyPrompt>,
}

/// The reflection store.
///
/// # Invariants
///
/// - The journal holds at most one record per calendar date
/// - The journal is ordered descending by date (most recent first)
/// - Record questions are frozen at creation and never recomputed
pub struct ReflectionStore {
    storage: Box<dyn StateStorage>,
    journal: Vec<DailyPrompt>,
    selection: Option<ActiveSelection>,
    simulated_date: Option<DayDate>,
    draft: String,
    reminder: ReminderSettings,
    current: Option<PromptId>,
    observers: Vec<Arc<dyn StoreObserver>>,
}

impl ReflectionStore {
    /// Loads persisted state from the given storage and derives today's
    /// prompt, exactly as an app launch does.
    ///
    /// Undecodable or missing fields fall back to defaults; this
    /// constructor never fails.
    pub fn new(storage: Box<dyn StateStorage>) -> Self {
        let mut journal: Vec<DailyPrompt> =
            load_json(storage.as_ref(), keys::PROMPTS).unwrap_or_default();
        journal.sort_by(|a, b| b.date().cmp(&a.date()));

        let topic: Option<Topic> = load_json(storage.as_ref(), keys::CURRENT_TOPIC);
        let cycle_start = load_plain(storage.as_ref(), keys::WEEK_START_DATE)
            .and_then(|raw| parse_day(&raw, keys::WEEK_START_DATE));
        let core_index: usize = load_plain(storage.as_ref(), keys::CORE_PROMPT_INDEX)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);
        let selection = match (topic, cycle_start) {
            (Some(topic), Some(start)) => Some(ActiveSelection::new(topic, start, core_index)),
            _ => None,
        };

        let simulated_date = load_plain(storage.as_ref(), keys::SIMULATED_DATE)
            .and_then(|raw| parse_day(&raw, keys::SIMULATED_DATE));
        let draft = load_plain(storage.as_ref(), keys::DRAFT_RESPONSE).unwrap_or_default();

        let reminder = ReminderSettings {
            enabled: load_plain(storage.as_ref(), keys::REMINDER_ENABLED)
                .map(|raw| raw == "true")
                .unwrap_or(false),
            time: load_plain(storage.as_ref(), keys::REMINDER_TIME)
                .and_then(|raw| ReminderSettings::parse_time(&raw))
                .unwrap_or_else(ReminderSettings::default_time),
        };

        let mut store = Self {
            storage,
            journal,
            selection,
            simulated_date,
            draft,
            reminder,
            current: None,
            observers: Vec::new(),
        };
        store.ensure_todays_prompt();
        store
    }

    /// Registers an observer notified after every successful mutation.
    pub fn subscribe(&mut self, observer: Arc<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Effective date
    // ─────────────────────────────────────────────────────────────────────

    /// The date all cycle math runs on: the simulated override when set,
    /// otherwise the real current day.
    pub fn effective_today(&self) -> DayDate {
        self.simulated_date.unwrap_or_else(DayDate::today)
    }

    /// Returns the simulated-date override, if active.
    pub fn simulated_date(&self) -> Option<DayDate> {
        self.simulated_date
    }

    /// Sets or clears the simulated-date override and re-derives today's
    /// prompt under the new effective date.
    pub fn set_simulated_date(&mut self, date: Option<DayDate>) {
        self.simulated_date = date;
        match date {
            Some(day) => self.put_logged(keys::SIMULATED_DATE, &day.to_string()),
            None => self.remove_logged(keys::SIMULATED_DATE),
        }
        self.ensure_todays_prompt();
    }

    /// Dev/test affordance: moves the effective date forward one day and
    /// re-derives today's prompt. No-op when no topic is active.
    pub fn advance_day(&mut self) -> Option<DailyPrompt> {
        if self.selection.is_none() {
            return None;
        }
        let next = self.effective_today().next();
        self.set_simulated_date(Some(next));
        self.notify(JournalEvent::DayAdvanced { to: next });
        self.current_prompt().cloned()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Topic lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Selects a topic, starting a fresh cycle today.
    ///
    /// Any record already dated effective-today is discarded first:
    /// switching topics mid-day invalidates that day's prompt, but prior
    /// days' history is untouched.
    pub fn select_topic(&mut self, topic: Topic, core_index: usize) {
        let today = self.effective_today();
        debug!(topic = topic.name(), core_index, "selecting topic");

        self.selection = Some(ActiveSelection::new(topic.clone(), today, core_index));
        self.persist_selection();

        self.journal.retain(|p| p.date() != today);
        self.current = None;
        self.persist_journal();

        self.ensure_todays_prompt();
        self.notify(JournalEvent::TopicSelected {
            topic: topic.name().to_string(),
        });
    }

    /// Clears the active selection without touching journal history.
    pub fn abandon_topic(&mut self) {
        self.selection = None;
        self.current = None;
        self.remove_logged(keys::CURRENT_TOPIC);
        self.remove_logged(keys::WEEK_START_DATE);
        self.remove_logged(keys::CORE_PROMPT_INDEX);
        self.notify(JournalEvent::TopicAbandoned);
    }

    /// Returns the currently selected topic, if any.
    pub fn current_topic(&self) -> Option<&Topic> {
        self.selection.as_ref().map(|s| s.topic())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Daily prompt lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Idempotently materializes today's prompt.
    ///
    /// An existing record for effective-today is returned unchanged; its
    /// question is never recomputed even if the selection has since
    /// changed. With no existing record and no active topic the result is
    /// `None` (a valid empty state). Otherwise the scheduler runs and
    /// exactly one new record is inserted and persisted.
    pub fn ensure_todays_prompt(&mut self) -> Option<DailyPrompt> {
        let today = self.effective_today();

        if let Some(existing) = self.journal.iter().find(|p| p.date() == today) {
            let existing = existing.clone();
            self.current = Some(*existing.id());
            // A committed response supersedes any leftover scratch draft.
            if existing.is_answered() && !self.draft.is_empty() {
                self.clear_draft();
            }
            return Some(existing);
        }

        let selection = match &self.selection {
            Some(selection) => selection,
            None => {
                self.current = None;
                return None;
            }
        };

        let spec = schedule(
            selection.topic(),
            selection.cycle_start(),
            selection.core_index(),
            today,
        );
        let prompt = DailyPrompt::from_spec(spec, today);
        debug!(
            date = %today,
            day = prompt.day_number(),
            week = prompt.week_number(),
            "created today's prompt"
        );

        self.current = Some(*prompt.id());
        self.journal.push(prompt.clone());
        self.journal.sort_by(|a, b| b.date().cmp(&a.date()));
        self.persist_journal();
        self.notify(JournalEvent::PromptCreated { date: today });
        Some(prompt)
    }

    /// Returns today's record, if one is active.
    pub fn current_prompt(&self) -> Option<&DailyPrompt> {
        let id = self.current?;
        self.journal.iter().find(|p| *p.id() == id)
    }

    /// Commits a response on today's prompt and clears the draft.
    ///
    /// Silent no-op when no prompt is active.
    pub fn save_response(&mut self, text: impl Into<String>) {
        let Some(id) = self.current else { return };
        let today = self.effective_today();
        let Some(prompt) = self.journal.iter_mut().find(|p| *p.id() == id) else {
            return;
        };

        prompt.record_response(text.into(), today);
        let date = prompt.date();
        self.persist_journal();
        self.clear_draft();
        self.notify(JournalEvent::ResponseSaved { date });
    }

    /// Clears the response on today's prompt, leaving its question and
    /// metadata intact. Silent no-op when no prompt is active.
    pub fn clear_response(&mut self) {
        let Some(id) = self.current else { return };
        let Some(prompt) = self.journal.iter_mut().find(|p| *p.id() == id) else {
            return;
        };

        prompt.clear_response();
        let date = prompt.date();
        self.persist_journal();
        self.notify(JournalEvent::ResponseCleared { date });
    }

    // ─────────────────────────────────────────────────────────────────────
    // Draft
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the unsaved scratch text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Stores scratch text so it survives a restart before commit.
    pub fn save_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        let draft = self.draft.clone();
        self.put_logged(keys::DRAFT_RESPONSE, &draft);
        self.notify(JournalEvent::DraftChanged);
    }

    /// Discards the scratch text.
    pub fn clear_draft(&mut self) {
        self.draft.clear();
        self.remove_logged(keys::DRAFT_RESPONSE);
        self.notify(JournalEvent::DraftChanged);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reminder settings
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the stored reminder settings.
    pub fn reminder_settings(&self) -> &ReminderSettings {
        &self.reminder
    }

    /// Stores reminder settings for the notification collaborator.
    pub fn set_reminder(&mut self, enabled: bool, time: NaiveTime) {
        self.reminder = ReminderSettings { enabled, time };
        let encoded = self.reminder.encode_time();
        self.put_logged(keys::REMINDER_ENABLED, if enabled { "true" } else { "false" });
        self.put_logged(keys::REMINDER_TIME, &encoded);
        self.notify(JournalEvent::ReminderChanged);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    /// All records, descending by date.
    pub fn journal(&self) -> &[DailyPrompt] {
        &self.journal
    }

    /// Records with a committed response, descending by date.
    pub fn answered(&self) -> Vec<DailyPrompt> {
        self.journal
            .iter()
            .filter(|p| p.is_answered())
            .cloned()
            .collect()
    }

    /// Answered records for one topic, descending by date.
    pub fn answered_for_topic(&self, topic_name: &str) -> Vec<DailyPrompt> {
        self.journal
            .iter()
            .filter(|p| p.topic() == topic_name && p.is_answered())
            .cloned()
            .collect()
    }

    /// The record bound to yesterday's effective date, if any.
    pub fn yesterdays_prompt(&self) -> Option<&DailyPrompt> {
        let yesterday = self.effective_today().previous();
        self.journal.iter().find(|p| p.date() == yesterday)
    }

    /// The 1-7 position within the current cycle, or 1 with no active cycle.
    pub fn current_day_in_cycle(&self) -> u32 {
        match &self.selection {
            Some(selection) => {
                cycle_position(selection.cycle_start(), self.effective_today()).day_in_cycle
            }
            None => 1,
        }
    }

    /// Read-only snapshot for the presentation layer.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            current_prompt: self.current_prompt().cloned(),
            current_topic: self.current_topic().cloned(),
            day_in_cycle: self.current_day_in_cycle(),
            draft: self.draft.clone(),
            answered: self.answered(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reset
    // ─────────────────────────────────────────────────────────────────────

    /// Wholesale reset: clears the journal, the selection, the draft, and
    /// the simulated date. Reminder settings are left alone; they belong
    /// to the notification collaborator.
    pub fn reset(&mut self) {
        self.journal.clear();
        self.selection = None;
        self.current = None;
        self.draft.clear();
        self.simulated_date = None;

        self.persist_journal();
        self.remove_logged(keys::CURRENT_TOPIC);
        self.remove_logged(keys::WEEK_START_DATE);
        self.remove_logged(keys::CORE_PROMPT_INDEX);
        self.remove_logged(keys::SIMULATED_DATE);
        self.remove_logged(keys::DRAFT_RESPONSE);
        self.notify(JournalEvent::Reset);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────

    fn notify(&self, event: JournalEvent) {
        for observer in &self.observers {
            observer.on_event(&event);
        }
    }

    fn persist_journal(&self) {
        match serde_json::to_string(&self.journal) {
            Ok(raw) => self.put_logged(keys::PROMPTS, &raw),
            Err(e) => warn!(error = %e, "failed to encode journal; keeping in-memory state"),
        }
    }

    fn persist_selection(&self) {
        let Some(selection) = &self.selection else {
            return;
        };
        match serde_json::to_string(selection.topic()) {
            Ok(raw) => self.put_logged(keys::CURRENT_TOPIC, &raw),
            Err(e) => warn!(error = %e, "failed to encode current topic"),
        }
        self.put_logged(keys::WEEK_START_DATE, &selection.cycle_start().to_string());
        self.put_logged(keys::CORE_PROMPT_INDEX, &selection.core_index().to_string());
    }

    fn put_logged(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.put(key, value) {
            warn!(key, error = %e, "state write failed; continuing with in-memory state");
        }
    }

    fn remove_logged(&self, key: &str) {
        if let Err(e) = self.storage.remove(key) {
            warn!(key, error = %e, "state removal failed; continuing with in-memory state");
        }
    }
}

fn load_json<T: DeserializeOwned>(storage: &dyn StateStorage, key: &str) -> Option<T> {
    let raw = load_plain(storage, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "discarding undecodable stored value");
            None
        }
    }
}

fn load_plain(storage: &dyn StateStorage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "state read failed; falling back to default");
            None
        }
    }
}

fn parse_day(raw: &str, key: &str) -> Option<DayDate> {
    match raw.parse::<chrono::NaiveDate>() {
        Ok(date) => Some(DayDate::from_naive(date)),
        Err(e) => {
            warn!(key, error = %e, "discarding unparseable stored date");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStateStorage;
    use crate::application::observer::test_support::RecordingObserver;
    use crate::domain::catalog::{DayCycle, TopicCatalog, TOPIC_PLACEHOLDER};

    fn fixed_store(topic_name: &str, core_index: usize) -> ReflectionStore {
        let mut store = empty_store();
        // Pin the effective date so tests are independent of the wall clock.
        store.set_simulated_date(DayDate::from_ymd(2024, 3, 1));
        let topic = TopicCatalog::built_in()
            .by_name(topic_name)
            .unwrap()
            .clone();
        store.select_topic(topic, core_index);
        store
    }

    fn empty_store() -> ReflectionStore {
        ReflectionStore::new(Box::new(InMemoryStateStorage::new()))
    }

    // Empty-state tests

    #[test]
    fn no_topic_means_no_prompt() {
        let mut store = empty_store();
        assert!(store.ensure_todays_prompt().is_none());
        assert!(store.current_prompt().is_none());
    }

    #[test]
    fn no_topic_defaults_day_in_cycle_to_one() {
        let store = empty_store();
        assert_eq!(store.current_day_in_cycle(), 1);
    }

    #[test]
    fn save_response_with_no_prompt_is_a_no_op() {
        let mut store = empty_store();
        store.save_response("unheard");
        assert!(store.journal().is_empty());
    }

    #[test]
    fn advance_day_with_no_topic_is_a_no_op() {
        let mut store = empty_store();
        let before = store.simulated_date();
        assert!(store.advance_day().is_none());
        assert_eq!(store.simulated_date(), before);
    }

    // ensure_todays_prompt tests

    #[test]
    fn ensure_is_idempotent_within_a_day() {
        let mut store = fixed_store("Focus", 0);
        let first = store.ensure_todays_prompt().unwrap();
        let second = store.ensure_todays_prompt().unwrap();
        assert_eq!(first, second);
        assert_eq!(store.journal().len(), 1);
    }

    #[test]
    fn day_one_uses_selected_core_prompt() {
        let store = fixed_store("Gratitude", 2);
        let topic = TopicCatalog::built_in().by_name("Gratitude").unwrap();
        assert_eq!(
            store.current_prompt().unwrap().question(),
            topic.core_prompts()[2]
        );
    }

    #[test]
    fn existing_record_question_is_frozen_across_selection_changes() {
        let mut store = fixed_store("Focus", 0);
        store.save_response("answered under Focus");
        store.advance_day();
        let question = store.current_prompt().unwrap().question().to_string();

        // Change the selection; today's already-created record must not move.
        store.abandon_topic();
        let prompt = store.ensure_todays_prompt().unwrap();
        assert_eq!(prompt.question(), question);
        assert_eq!(prompt.topic(), "Focus");
    }

    // Cycle progression tests

    #[test]
    fn advance_day_walks_the_cycle() {
        let mut store = fixed_store("Focus", 0);
        assert_eq!(store.current_day_in_cycle(), 1);
        store.advance_day();
        assert_eq!(store.current_day_in_cycle(), 2);
        assert_eq!(store.current_prompt().unwrap().day_label(), "Deepen");
    }

    #[test]
    fn seven_day_advance_increments_week_and_keeps_day() {
        let mut store = fixed_store("Focus", 0);
        for _ in 0..7 {
            store.advance_day();
        }
        let prompt = store.current_prompt().unwrap();
        assert_eq!(prompt.day_number(), 1);
        assert_eq!(prompt.week_number(), 2);
        assert_eq!(store.current_day_in_cycle(), 1);
    }

    #[test]
    fn day_two_week_one_shows_first_variant() {
        let mut store = fixed_store("Gratitude", 2);
        store.advance_day();
        let expected = DayCycle::stage(2).unwrap().variants()[0]
            .replace(TOPIC_PLACEHOLDER, "gratitude");
        assert_eq!(store.current_prompt().unwrap().question(), expected);
    }

    // Response tests

    #[test]
    fn save_response_stamps_effective_today() {
        let mut store = fixed_store("Focus", 0);
        store.save_response("a thought");
        let prompt = store.current_prompt().unwrap();
        assert_eq!(prompt.response(), Some("a thought"));
        assert_eq!(prompt.responded_at(), Some(store.effective_today()));
    }

    #[test]
    fn clear_response_preserves_question_and_metadata() {
        let mut store = fixed_store("Focus", 0);
        let question = store.current_prompt().unwrap().question().to_string();
        store.save_response("a thought");
        store.clear_response();

        let prompt = store.current_prompt().unwrap();
        assert!(!prompt.is_answered());
        assert!(prompt.responded_at().is_none());
        assert_eq!(prompt.question(), question);
        assert_eq!(prompt.day_number(), 1);
        assert_eq!(prompt.topic(), "Focus");
    }

    #[test]
    fn save_response_clears_the_draft() {
        let mut store = fixed_store("Focus", 0);
        store.save_draft("half-finished");
        store.save_response("done");
        assert_eq!(store.draft(), "");
    }

    #[test]
    fn stale_draft_is_dropped_once_today_is_answered() {
        let mut store = fixed_store("Focus", 0);
        store.save_response("committed");
        store.save_draft("leftover scratch");
        store.ensure_todays_prompt();
        assert_eq!(store.draft(), "");
    }

    // Topic switching tests

    #[test]
    fn switching_topics_replaces_only_todays_record() {
        let mut store = fixed_store("Focus", 0);
        store.save_response("day one");
        store.advance_day();
        store.save_response("day two");
        assert_eq!(store.journal().len(), 2);

        let purpose = TopicCatalog::built_in().by_name("Purpose").unwrap().clone();
        store.select_topic(purpose, 0);

        assert_eq!(store.journal().len(), 2);
        let today = store.current_prompt().unwrap();
        assert_eq!(today.topic(), "Purpose");
        assert!(!today.is_answered());
        // Yesterday's record is untouched.
        let yesterday = store.yesterdays_prompt().unwrap();
        assert_eq!(yesterday.topic(), "Focus");
        assert_eq!(yesterday.response(), Some("day one"));
    }

    #[test]
    fn abandoning_keeps_history_but_clears_selection() {
        let mut store = fixed_store("Focus", 0);
        store.save_response("kept");
        store.abandon_topic();

        assert!(store.current_topic().is_none());
        assert!(store.current_prompt().is_none());
        assert_eq!(store.journal().len(), 1);
        assert_eq!(store.current_day_in_cycle(), 1);
    }

    // Draft tests

    #[test]
    fn draft_roundtrips_and_clears() {
        let mut store = fixed_store("Focus", 0);
        store.save_draft("in progress");
        assert_eq!(store.draft(), "in progress");
        store.clear_draft();
        assert_eq!(store.draft(), "");
    }

    // Persistence tests

    #[test]
    fn state_survives_a_reload() {
        let storage = Arc::new(InMemoryStateStorage::new());
        {
            let mut store = ReflectionStore::new(Box::new(SharedStorage(storage.clone())));
            store.set_simulated_date(DayDate::from_ymd(2024, 3, 1));
            let topic = TopicCatalog::built_in().by_name("Focus").unwrap().clone();
            store.select_topic(topic, 1);
            store.save_response("persisted");
            store.save_draft("scratch");
        }

        let store = ReflectionStore::new(Box::new(SharedStorage(storage)));
        assert_eq!(store.current_topic().unwrap().name(), "Focus");
        let prompt = store.current_prompt().unwrap();
        assert_eq!(prompt.response(), Some("persisted"));
        assert_eq!(store.draft(), "scratch");
    }

    #[test]
    fn corrupt_journal_loads_as_empty() {
        let storage = InMemoryStateStorage::seeded([(keys::PROMPTS, "{{not json")]);
        let store = ReflectionStore::new(Box::new(storage));
        assert!(store.journal().is_empty());
    }

    #[test]
    fn invalid_stored_topic_degrades_to_no_selection() {
        // An invariant-breaking topic (no core prompts) must be discarded
        // on load, not carried into scheduling.
        let storage = InMemoryStateStorage::seeded([
            (
                keys::CURRENT_TOPIC,
                r#"{"id":"00000000-0000-0000-0000-000000000000","name":"Calm","description":"","icon":"","core_prompts":[]}"#,
            ),
            (keys::WEEK_START_DATE, "2024-03-01"),
            (keys::SIMULATED_DATE, "2024-03-01"),
        ]);
        let mut store = ReflectionStore::new(Box::new(storage));
        assert!(store.current_topic().is_none());
        assert!(store.ensure_todays_prompt().is_none());
    }

    #[test]
    fn reload_drops_a_draft_shadowing_an_answered_day() {
        let storage = Arc::new(InMemoryStateStorage::new());
        {
            let mut store = ReflectionStore::new(Box::new(SharedStorage(storage.clone())));
            store.set_simulated_date(DayDate::from_ymd(2024, 3, 1));
            let topic = TopicCatalog::built_in().by_name("Focus").unwrap().clone();
            store.select_topic(topic, 0);
            store.save_response("committed");
            store.save_draft("leftover scratch");
        }

        let store = ReflectionStore::new(Box::new(SharedStorage(storage.clone())));
        assert_eq!(store.draft(), "");
        assert!(storage.get(keys::DRAFT_RESPONSE).unwrap().is_none());
    }

    #[test]
    fn write_failures_degrade_to_in_memory_state() {
        let storage = Arc::new(InMemoryStateStorage::new());
        let mut store = ReflectionStore::new(Box::new(SharedStorage(storage.clone())));
        store.set_simulated_date(DayDate::from_ymd(2024, 3, 1));
        let topic = TopicCatalog::built_in().by_name("Focus").unwrap().clone();
        store.select_topic(topic, 0);

        storage.set_fail_writes(true);
        store.save_response("unpersisted but visible");
        assert_eq!(
            store.current_prompt().unwrap().response(),
            Some("unpersisted but visible")
        );
    }

    #[test]
    fn reset_clears_everything_but_reminders() {
        let mut store = fixed_store("Focus", 0);
        store.save_response("gone soon");
        store.set_reminder(true, ReminderSettings::default_time());
        store.reset();

        assert!(store.journal().is_empty());
        assert!(store.current_topic().is_none());
        assert!(store.simulated_date().is_none());
        assert_eq!(store.draft(), "");
        assert!(store.reminder_settings().enabled);
    }

    // Reminder tests

    #[test]
    fn reminder_settings_roundtrip_through_reload() {
        let storage = Arc::new(InMemoryStateStorage::new());
        {
            let mut store = ReflectionStore::new(Box::new(SharedStorage(storage.clone())));
            let time = NaiveTime::from_hms_opt(20, 30, 0).unwrap();
            store.set_reminder(true, time);
        }
        let store = ReflectionStore::new(Box::new(SharedStorage(storage)));
        assert!(store.reminder_settings().enabled);
        assert_eq!(
            store.reminder_settings().time,
            NaiveTime::from_hms_opt(20, 30, 0).unwrap()
        );
    }

    // Observer tests

    #[test]
    fn observers_see_mutations_in_order() {
        let mut store = empty_store();
        store.set_simulated_date(DayDate::from_ymd(2024, 3, 1));
        let observer = Arc::new(RecordingObserver::default());
        store.subscribe(observer.clone());

        let topic = TopicCatalog::built_in().by_name("Focus").unwrap().clone();
        store.select_topic(topic, 0);
        store.save_response("noted");

        let events = observer.events();
        assert!(events.contains(&JournalEvent::TopicSelected {
            topic: "Focus".to_string()
        }));
        let saved = events
            .iter()
            .position(|e| matches!(e, JournalEvent::ResponseSaved { .. }));
        let created = events
            .iter()
            .position(|e| matches!(e, JournalEvent::PromptCreated { .. }));
        assert!(created.unwrap() < saved.unwrap());
    }

    /// Lets tests share one in-memory store across ReflectionStore instances.
    struct SharedStorage(Arc<InMemoryStateStorage>);

    impl StateStorage for SharedStorage {
        fn get(&self, key: &str) -> Result<Option<String>, crate::ports::StorageError> {
            self.0.get(key)
        }

        fn put(&self, key: &str, value: &str) -> Result<(), crate::ports::StorageError> {
            self.0.put(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), crate::ports::StorageError> {
            self.0.remove(key)
        }

        fn clear(&self) -> Result<(), crate::ports::StorageError> {
            self.0.clear()
        }
    }
}

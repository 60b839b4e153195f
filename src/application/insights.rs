//! Derived views over the journal.
//!
//! Pure aggregations recomputed on demand; data volumes are bounded by one
//! record per day of app usage, so nothing here caches.

use crate::domain::catalog::DAYS_PER_CYCLE;
use crate::domain::foundation::DayDate;
use crate::domain::journal::DailyPrompt;

/// Counts consecutive answered days walking backward from `real_today`.
///
/// Streaks are anchored to the real calendar, not the simulated date, so a
/// dev-tools time jump cannot manufacture a streak. Stops at the first day
/// without an answered record.
pub fn current_streak(journal: &[DailyPrompt], real_today: DayDate) -> u32 {
    let mut streak = 0;
    let mut check = real_today;
    while journal
        .iter()
        .any(|p| p.date() == check && p.is_answered())
    {
        streak += 1;
        check = check.previous();
    }
    streak
}

/// Returns the sorted distinct topic names among answered records.
pub fn topics_explored(journal: &[DailyPrompt]) -> Vec<String> {
    let mut names: Vec<String> = journal
        .iter()
        .filter(|p| p.is_answered())
        .map(|p| p.topic().to_string())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Sums whitespace-delimited tokens across all answered responses.
pub fn total_words(journal: &[DailyPrompt]) -> usize {
    journal
        .iter()
        .filter_map(|p| p.response())
        .map(|r| r.split_whitespace().count())
        .sum()
}

/// Counts answered entries for one topic.
pub fn entry_count_for_topic(journal: &[DailyPrompt], topic_name: &str) -> usize {
    journal
        .iter()
        .filter(|p| p.topic() == topic_name && p.is_answered())
        .count()
}

/// Which of the 7 cycle days have an answered record for this topic.
///
/// Matches topic+day anywhere in history, not just the current cycle, so a
/// replayed topic shows prior cycles' completions too. Index 0 is day 1.
pub fn day_completion(journal: &[DailyPrompt], topic_name: &str) -> [bool; DAYS_PER_CYCLE as usize] {
    let mut completed = [false; DAYS_PER_CYCLE as usize];
    for prompt in journal {
        if prompt.topic() == topic_name && prompt.is_answered() {
            let day = prompt.day_number();
            if (1..=DAYS_PER_CYCLE).contains(&day) {
                completed[(day - 1) as usize] = true;
            }
        }
    }
    completed
}

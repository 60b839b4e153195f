//! Active topic selection state.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Topic;
use crate::domain::foundation::DayDate;

/// The currently chosen topic plus the parameters of its running cycle.
///
/// Set when the user selects a topic, cleared when they abandon it.
/// Not versioned: changing the selection never retroactively alters
/// already-created journal records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSelection {
    topic: Topic,
    cycle_start: DayDate,
    core_index: usize,
}

impl ActiveSelection {
    /// Creates a selection starting its cycle on the given day.
    pub fn new(topic: Topic, cycle_start: DayDate, core_index: usize) -> Self {
        Self {
            topic,
            cycle_start,
            core_index,
        }
    }

    /// Returns the chosen topic.
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// Returns the day the current 7-day cycle began.
    pub fn cycle_start(&self) -> DayDate {
        self.cycle_start
    }

    /// Returns the core-prompt index (0-4) fixed at selection time.
    pub fn core_index(&self) -> usize {
        self.core_index
    }
}

//! DayDate value object for calendar-day-granularity dates.
//!
//! All cycle math in the engine runs on whole calendar days. Wrapping
//! `chrono::NaiveDate` keeps hour/minute noise out of the domain and makes
//! "same day" comparisons exact instead of elapsed-hours approximations.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable calendar day, no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayDate(NaiveDate);

impl DayDate {
    /// Returns the real current calendar day in local time.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Creates a DayDate from a NaiveDate.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a DayDate from year/month/day, if valid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the inner NaiveDate.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the day after this one.
    pub fn next(&self) -> Self {
        Self(self.0 + Duration::days(1))
    }

    /// Returns the day before this one.
    pub fn previous(&self) -> Self {
        Self(self.0 - Duration::days(1))
    }

    /// Creates a new DayDate offset by the given number of days.
    ///
    /// Negative values go backward.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Returns the whole-day difference `self − earlier`.
    ///
    /// Negative when `earlier` is actually later.
    pub fn days_since(&self, earlier: &DayDate) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    /// Renders the date for human-readable output, e.g. "January 15, 2024".
    pub fn long_format(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }
}

impl fmt::Display for DayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

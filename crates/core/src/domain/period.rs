//! Calendar period types.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month in a specific year.
///
/// Grouping by `YearMonth` keeps, say, January 2024 and January 2025 in
/// separate buckets. The derived ordering is chronological (year first,
/// then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1 through 12.
    pub month: u32,
}

impl YearMonth {
    /// Returns the year-month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    /// Formats as `YYYY-MM`, e.g. `2024-01`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// An inclusive date range used by the cash forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastWindow {
    /// First day covered, inclusive.
    pub start: NaiveDate,
    /// Last day covered, inclusive.
    pub end: NaiveDate,
}

impl ForecastWindow {
    /// Builds a window running from `start` through `start + days`.
    ///
    /// A due date exactly `days` ahead still falls inside the window.
    #[must_use]
    pub fn days_ahead(start: NaiveDate, days: u64) -> Self {
        let end = start
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    /// Returns true if the given date falls within this window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

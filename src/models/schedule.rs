//! Day and week models.
//!
//! A schedule is a sequence of [`Week`]s, each holding the [`Day`]s an
//! employee fills in for one calendar week of the pay period.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::TimeEntry;

/// One calendar day of a time card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// The calendar date, also the reference date for parsing entry times.
    pub date: NaiveDate,
    /// Worked intervals in the order they were entered.
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
    /// Recorded break intervals. Only present when breaks are auto-deducted;
    /// the deduction itself is a flat amount per day.
    #[serde(default)]
    pub breaks: Vec<TimeEntry>,
}

impl Day {
    /// Creates a day with no entries or breaks.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
            breaks: Vec::new(),
        }
    }

    /// Returns the day of the week.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::models::Day;
    /// use chrono::{NaiveDate, Weekday};
    ///
    /// let day = Day::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    /// assert_eq!(day.weekday(), Weekday::Sun);
    /// ```
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// One week of a pay period, holding consecutive days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// Days in chronological order.
    pub days: Vec<Day>,
}

impl Week {
    /// Returns the first date in the week, if the week has any days.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }
}

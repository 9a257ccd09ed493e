//! Time entry model and related types.
//!
//! This module defines the [`TimeEntry`] struct, the clock-in/clock-out pair
//! an employee fills in, and the [`Meridiem`] marker used by 12-hour times.

use serde::{Deserialize, Serialize};

/// The AM/PM marker attached to a 12-hour clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meridiem {
    /// Before noon.
    #[default]
    #[serde(rename = "AM")]
    Am,
    /// Noon and after.
    #[serde(rename = "PM")]
    Pm,
}

/// A clock-in and clock-out pair as typed by the employee.
///
/// Times are kept as entered (`"9:00"`, `"17:30"`) and only interpreted when
/// hours are calculated. The markers are ignored under 24-hour notation.
/// Either side may be empty while the entry has not been filled in.
///
/// Break intervals share this shape.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{Meridiem, TimeEntry};
///
/// let entry = TimeEntry::new("9:00", Meridiem::Am, "5:00", Meridiem::Pm);
/// assert!(entry.is_complete());
/// assert!(!TimeEntry::default().is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Clock-in time of day.
    #[serde(default)]
    pub start: String,
    /// Marker for the clock-in time.
    #[serde(default)]
    pub start_period: Meridiem,
    /// Clock-out time of day.
    #[serde(default)]
    pub end: String,
    /// Marker for the clock-out time.
    #[serde(default)]
    pub end_period: Meridiem,
}

impl TimeEntry {
    /// Creates a filled-in entry.
    pub fn new(
        start: impl Into<String>,
        start_period: Meridiem,
        end: impl Into<String>,
        end_period: Meridiem,
    ) -> Self {
        Self {
            start: start.into(),
            start_period,
            end: end.into(),
            end_period,
        }
    }

    /// Creates an entry for 24-hour notation, where markers do not matter.
    pub fn hours24(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::new(start, Meridiem::Am, end, Meridiem::Am)
    }

    /// Returns true when both the clock-in and clock-out times are present.
    pub fn is_complete(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }
}

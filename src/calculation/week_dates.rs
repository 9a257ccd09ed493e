//! Calendar arithmetic for laying out pay-period weeks.
//!
//! Weekdays are numbered the way the settings store them: Sunday = 0
//! through Saturday = 6.

use chrono::{Datelike, Duration, NaiveDate};

/// Returns the date `days` days after `date` (before it when negative).
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Returns the most recent date on or before `date` that falls on the
/// weekday `week_starts_on` (Sunday = 0).
///
/// Values above 6 wrap around the week rather than failing.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::start_of_week;
/// use chrono::NaiveDate;
///
/// // 2026-10-21 is a Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
///
/// // Week starting Sunday
/// assert_eq!(start_of_week(wednesday, 0), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
/// // Week starting Wednesday is the day itself
/// assert_eq!(start_of_week(wednesday, 3), wednesday);
/// // Week starting Thursday reaches back six days
/// assert_eq!(start_of_week(wednesday, 4), NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
/// ```
pub fn start_of_week(date: NaiveDate, week_starts_on: u8) -> NaiveDate {
    let current = i64::from(date.weekday().num_days_from_sunday());
    let diff = (current - i64::from(week_starts_on)).rem_euclid(7);
    add_days(date, -diff)
}

/// Returns the date of day `day_index` in week `week_index` of a schedule
/// whose first week starts on `week_start`.
///
/// Every week occupies seven calendar days even when fewer days are
/// tracked, so week two always starts seven days after week one.
pub fn schedule_date(week_start: NaiveDate, week_index: usize, day_index: usize) -> NaiveDate {
    add_days(week_start, (week_index * 7 + day_index) as i64)
}

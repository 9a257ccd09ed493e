//! Daily worked-hours calculation.
//!
//! Sums the positive spans of a day's filled-in entries and applies the flat
//! per-day break deduction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TimeNotation;
use crate::error::EngineResult;
use crate::models::{AuditStep, TimeEntry};

use super::time_parsing::parse_time;

/// Minutes in an hour, the divisor for every minute-to-hour conversion.
pub(crate) const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Converts a minute count to hours with a single division. Totals are
/// summed in minutes before converting.
pub(crate) fn hours_from_minutes(minutes: Decimal) -> Decimal {
    minutes / MINUTES_PER_HOUR
}

/// The result of calculating one day's worked hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHoursResult {
    /// Worked whole minutes after the break deduction, never negative.
    pub worked_minutes: i64,
    /// Worked hours after the break deduction, never negative.
    pub hours: Decimal,
    /// Sum of the positive entry spans before any deduction.
    pub raw_hours: Decimal,
    /// Hours deducted for breaks (zero when auto-deduction is off).
    pub break_deduction: Decimal,
    /// Indices of complete entries whose end was not after their start.
    pub dropped_entries: Vec<usize>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the hours worked on one day.
///
/// For every entry with both times filled in, the span from start to end is
/// added when it is positive. Entries whose end is at or before their start
/// are dropped without error; overnight spans are not supported. Entries with
/// either side empty contribute nothing.
///
/// When `auto_deduct_breaks` is set, `break_minutes / 60` hours are deducted
/// once for the day no matter how many break intervals were recorded. The
/// result is clamped at zero.
///
/// # Arguments
///
/// * `entries` - The day's worked intervals
/// * `breaks` - The day's recorded break intervals (only counted in the audit step)
/// * `date` - Reference date for parsing entry times
/// * `notation` - How entry times are written
/// * `break_minutes` - Length of the flat break deduction
/// * `auto_deduct_breaks` - Whether to apply the deduction
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns an error if a complete entry holds a time that cannot be parsed.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::calculate_daily_hours;
/// use timecard_engine::config::TimeNotation;
/// use timecard_engine::models::{Meridiem, TimeEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let entries = vec![
///     TimeEntry::new("8:00", Meridiem::Am, "12:00", Meridiem::Pm),
///     TimeEntry::new("1:00", Meridiem::Pm, "6:00", Meridiem::Pm),
/// ];
///
/// // 4 + 5 hours, less a 60 minute break
/// let result = calculate_daily_hours(&entries, &[], date, TimeNotation::TwelveHour, 60, true, 1)
///     .unwrap();
/// assert_eq!(result.raw_hours, Decimal::new(9, 0));
/// assert_eq!(result.hours, Decimal::new(8, 0));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn calculate_daily_hours(
    entries: &[TimeEntry],
    breaks: &[TimeEntry],
    date: NaiveDate,
    notation: TimeNotation,
    break_minutes: u32,
    auto_deduct_breaks: bool,
    step_number: u32,
) -> EngineResult<DailyHoursResult> {
    let mut raw_minutes: i64 = 0;
    let mut counted = 0usize;
    let mut dropped_entries = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_complete() {
            continue;
        }

        let start = parse_time(&entry.start, entry.start_period, date, notation)?;
        let end = parse_time(&entry.end, entry.end_period, date, notation)?;
        let span = (end - start).num_minutes();

        if span > 0 {
            raw_minutes += span;
            counted += 1;
        } else {
            dropped_entries.push(index);
        }
    }

    let deducted_minutes = if auto_deduct_breaks {
        i64::from(break_minutes)
    } else {
        0
    };
    let worked_minutes = (raw_minutes - deducted_minutes).max(0);

    let raw_hours = hours_from_minutes(Decimal::from(raw_minutes));
    let break_deduction = hours_from_minutes(Decimal::from(deducted_minutes));
    let hours = hours_from_minutes(Decimal::from(worked_minutes));

    let reasoning = if auto_deduct_breaks {
        format!(
            "{} entries total {} hours; deducted {} hour break, leaving {} hours",
            counted,
            raw_hours.normalize(),
            break_deduction.normalize(),
            hours.normalize()
        )
    } else {
        format!(
            "{} entries total {} hours, no break deduction",
            counted,
            hours.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_hours".to_string(),
        rule_name: "Daily Worked Hours".to_string(),
        input: serde_json::json!({
            "date": date.to_string(),
            "entries": entries.len(),
            "break_intervals": breaks.len(),
            "break_minutes": break_minutes,
            "auto_deduct_breaks": auto_deduct_breaks
        }),
        output: serde_json::json!({
            "raw_hours": raw_hours.normalize().to_string(),
            "break_deduction": break_deduction.normalize().to_string(),
            "hours": hours.normalize().to_string(),
            "worked_minutes": worked_minutes,
            "dropped_entries": dropped_entries
        }),
        reasoning,
    };

    Ok(DailyHoursResult {
        worked_minutes,
        hours,
        raw_hours,
        break_deduction,
        dropped_entries,
        audit_step,
    })
}

//! Computed time card models.
//!
//! This module contains the outputs of hour processing: per-day and per-week
//! figures, period totals, and the audit trace recording how each figure was
//! reached.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag input that was skipped or looked suspicious without
/// stopping the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for one employee's pay period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// Computed figures for one day.
///
/// `overtime_hours` is the sum of the daily and weekly components, which may
/// count the same hours twice when both thresholds are crossed on one day.
///
/// # Example
///
/// ```
/// use timecard_engine::models::DayHours;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = DayHours {
///     date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
///     worked_hours: Decimal::new(10, 0),
///     regular_hours: Decimal::new(8, 0),
///     daily_overtime: Decimal::new(2, 0),
///     weekly_overtime: Decimal::ZERO,
///     overtime_hours: Decimal::new(2, 0),
///     total_pay: Decimal::new(165, 0),
/// };
/// assert_eq!(day.regular_hours + day.daily_overtime, day.worked_hours);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// The calendar date.
    pub date: NaiveDate,
    /// Hours worked after any break deduction.
    pub worked_hours: Decimal,
    /// Worked hours not counted as daily overtime.
    pub regular_hours: Decimal,
    /// Hours beyond the daily threshold.
    pub daily_overtime: Decimal,
    /// Hours beyond the weekly threshold as of this day.
    pub weekly_overtime: Decimal,
    /// Daily plus weekly overtime.
    pub overtime_hours: Decimal,
    /// Pay for the day, regular plus overtime.
    pub total_pay: Decimal,
}

/// Computed figures for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekHours {
    /// Per-day results in order.
    pub days: Vec<DayHours>,
    /// Hours actually worked during the week.
    pub week_worked: Decimal,
    /// Sum of the days' regular hours.
    pub week_regular: Decimal,
    /// Sum of the days' overtime hours.
    pub week_overtime: Decimal,
    /// Sum of the days' pay.
    pub week_gross: Decimal,
}

/// Aggregated totals across every week of a pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Total regular hours.
    pub regular_hours: Decimal,
    /// Total overtime hours.
    pub overtime_hours: Decimal,
    /// Total hours worked.
    pub worked_hours: Decimal,
    /// Total gross pay.
    pub gross_pay: Decimal,
}

impl PeriodTotals {
    /// Sums the week-level aggregates.
    pub fn from_weeks(weeks: &[WeekHours]) -> Self {
        Self {
            regular_hours: weeks.iter().map(|w| w.week_regular).sum(),
            overtime_hours: weeks.iter().map(|w| w.week_overtime).sum(),
            worked_hours: weeks.iter().map(|w| w.week_worked).sum(),
            gross_pay: weeks.iter().map(|w| w.week_gross).sum(),
        }
    }
}

/// The processed time card of one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodHours {
    /// The employee the figures belong to.
    pub employee_id: Uuid,
    /// Per-week breakdown in order.
    pub weeks: Vec<WeekHours>,
    /// Totals across the pay period.
    pub totals: PeriodTotals,
    /// Record of every calculation decision.
    pub audit_trace: AuditTrace,
}

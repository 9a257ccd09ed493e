//! Daily and weekly overtime detection.
//!
//! Daily overtime is measured against the day's own hours. Weekly overtime is
//! measured against a running total for the week, so the weekly threshold is
//! crossed incrementally as days are processed in order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

use super::daily_hours::{MINUTES_PER_HOUR, hours_from_minutes};

/// Default daily overtime threshold in hours.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default weekly overtime threshold in hours.
pub const DEFAULT_WEEKLY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// The overtime found for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Minutes beyond the daily threshold.
    pub daily_overtime_minutes: Decimal,
    /// Minutes beyond the weekly threshold as of this day.
    pub weekly_overtime_minutes: Decimal,
    /// Hours beyond the daily threshold.
    pub daily_overtime: Decimal,
    /// Hours beyond the weekly threshold as of this day.
    pub weekly_overtime: Decimal,
    /// The audit step recording this detection.
    pub audit_step: AuditStep,
}

impl OvertimeSplit {
    /// Returns daily plus weekly overtime, the figure paid at the overtime rate.
    pub fn total(&self) -> Decimal {
        self.daily_overtime + self.weekly_overtime
    }
}

/// Detects daily and weekly overtime for one day.
///
/// * `daily_overtime = max(0, daily_hours - daily_threshold)`
/// * `weekly_overtime = max(0, cumulative_week_total - weekly_threshold)`
///
/// `cumulative_week_total` is the regular hours of the prior days in the week
/// plus this day's full hours. This day's daily overtime is not taken out
/// before the weekly comparison, so on a day that crosses both thresholds the
/// same hours can be counted in both amounts. Callers pay the sum.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::{
///     calculate_overtime, DEFAULT_DAILY_OVERTIME_THRESHOLD, DEFAULT_WEEKLY_OVERTIME_THRESHOLD,
/// };
/// use rust_decimal::Decimal;
///
/// // 10 hours on the first day of the week
/// let split = calculate_overtime(
///     Decimal::new(10, 0),
///     Decimal::new(10, 0),
///     DEFAULT_DAILY_OVERTIME_THRESHOLD,
///     DEFAULT_WEEKLY_OVERTIME_THRESHOLD,
///     1,
/// );
/// assert_eq!(split.daily_overtime, Decimal::new(2, 0));
/// assert_eq!(split.weekly_overtime, Decimal::ZERO);
/// ```
pub fn calculate_overtime(
    daily_hours: Decimal,
    cumulative_week_total: Decimal,
    daily_threshold: Decimal,
    weekly_threshold: Decimal,
    step_number: u32,
) -> OvertimeSplit {
    detect_overtime(
        daily_hours * MINUTES_PER_HOUR,
        cumulative_week_total * MINUTES_PER_HOUR,
        daily_threshold,
        weekly_threshold,
        step_number,
    )
}

/// Detects overtime from minute counts, comparing against the thresholds
/// scaled to minutes. Hours in the result are converted once from the minute
/// excess.
pub(crate) fn detect_overtime(
    daily_minutes: Decimal,
    cumulative_minutes: Decimal,
    daily_threshold: Decimal,
    weekly_threshold: Decimal,
    step_number: u32,
) -> OvertimeSplit {
    let daily_overtime_minutes = excess(daily_minutes, daily_threshold * MINUTES_PER_HOUR);
    let weekly_overtime_minutes = excess(cumulative_minutes, weekly_threshold * MINUTES_PER_HOUR);

    let daily_hours = hours_from_minutes(daily_minutes);
    let cumulative_week_total = hours_from_minutes(cumulative_minutes);
    let daily_overtime = hours_from_minutes(daily_overtime_minutes);
    let weekly_overtime = hours_from_minutes(weekly_overtime_minutes);

    let reasoning = match (daily_overtime > Decimal::ZERO, weekly_overtime > Decimal::ZERO) {
        (false, false) => format!(
            "{} hours is within the {} hour daily threshold and the week total of {} is within {}",
            daily_hours.normalize(),
            daily_threshold.normalize(),
            cumulative_week_total.normalize(),
            weekly_threshold.normalize()
        ),
        (true, false) => format!(
            "{} hours exceeds {} hour daily threshold by {} hours",
            daily_hours.normalize(),
            daily_threshold.normalize(),
            daily_overtime.normalize()
        ),
        (false, true) => format!(
            "week total of {} hours exceeds {} hour weekly threshold by {} hours",
            cumulative_week_total.normalize(),
            weekly_threshold.normalize(),
            weekly_overtime.normalize()
        ),
        (true, true) => format!(
            "{} hours exceeds {} hour daily threshold by {} and week total of {} exceeds {} by {}; both counted",
            daily_hours.normalize(),
            daily_threshold.normalize(),
            daily_overtime.normalize(),
            cumulative_week_total.normalize(),
            weekly_threshold.normalize(),
            weekly_overtime.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_detection".to_string(),
        rule_name: "Daily and Weekly Overtime Detection".to_string(),
        input: serde_json::json!({
            "daily_hours": daily_hours.normalize().to_string(),
            "cumulative_week_total": cumulative_week_total.normalize().to_string(),
            "daily_threshold": daily_threshold.normalize().to_string(),
            "weekly_threshold": weekly_threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "daily_overtime": daily_overtime.normalize().to_string(),
            "weekly_overtime": weekly_overtime.normalize().to_string()
        }),
        reasoning,
    };

    OvertimeSplit {
        daily_overtime_minutes,
        weekly_overtime_minutes,
        daily_overtime,
        weekly_overtime,
        audit_step,
    }
}

fn excess(amount: Decimal, threshold: Decimal) -> Decimal {
    if amount > threshold {
        amount - threshold
    } else {
        Decimal::ZERO
    }
}

//! Per-employee aggregation of hours, overtime and pay.
//!
//! Days are processed in order within each week, keeping a running total of
//! regular minutes that feeds the weekly overtime check. Totals stay in whole
//! minutes and are converted to hours once per figure.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::EngineResult;
use crate::models::{
    AuditTrace, AuditWarning, DayHours, Employee, PayPeriodHours, PeriodTotals, WeekHours,
};

use super::daily_hours::{calculate_daily_hours, hours_from_minutes};
use super::overtime::detect_overtime;
use super::pay::calculate_day_pay;

/// Processes an employee's time card into per-day and per-week figures.
///
/// For each day of each week:
/// 1. Worked hours are calculated from the day's entries
/// 2. The provisional week total is the week's regular hours so far plus
///    today's worked hours
/// 3. Daily and weekly overtime are detected against the settings'
///    thresholds (both zero when overtime is disabled)
/// 4. Regular hours are worked hours less daily overtime and are added to
///    the week's regular total
/// 5. Pay is regular hours at the base rate plus daily and weekly overtime
///    at the overtime rate
///
/// Running totals reset at the start of every week.
///
/// # Errors
///
/// Returns an error if a filled-in entry holds a time that cannot be parsed.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::{create_employee, process_employee_hours};
/// use timecard_engine::config::Settings;
/// use timecard_engine::models::{Meridiem, TimeEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let settings = Settings { pay_period_weeks: 1, ..Settings::default() };
/// let mut employee = create_employee(&settings, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
/// for day in &mut employee.weeks[0].days {
///     day.entries[0] = TimeEntry::new("9:00", Meridiem::Am, "5:00", Meridiem::Pm);
/// }
///
/// let result = process_employee_hours(&employee, &settings).unwrap();
/// assert_eq!(result.weeks[0].week_regular, Decimal::new(40, 0));
/// assert_eq!(result.weeks[0].week_gross, Decimal::new(600, 0));
/// ```
pub fn process_employee_hours(
    employee: &Employee,
    settings: &Settings,
) -> EngineResult<PayPeriodHours> {
    let mut audit_trace = AuditTrace::default();
    let mut step_number = 1;
    let mut weeks = Vec::with_capacity(employee.weeks.len());

    for (week_index, week) in employee.weeks.iter().enumerate() {
        let mut week_worked_minutes = Decimal::ZERO;
        let mut week_regular_minutes = Decimal::ZERO;
        let mut week_overtime_minutes = Decimal::ZERO;
        let mut week_gross = Decimal::ZERO;
        let mut days = Vec::with_capacity(week.days.len());

        for day in &week.days {
            let daily = calculate_daily_hours(
                &day.entries,
                &day.breaks,
                day.date,
                settings.time_notation,
                settings.break_minutes,
                settings.auto_deduct_breaks,
                step_number,
            )?;
            step_number += 1;

            for &entry_index in &daily.dropped_entries {
                warn!(
                    employee_id = %employee.id,
                    date = %day.date,
                    weekday = ?day.weekday(),
                    entry = entry_index,
                    "Dropping entry that does not end after it starts"
                );
                audit_trace.warnings.push(AuditWarning {
                    code: "ENTRY_NOT_POSITIVE".to_string(),
                    message: format!(
                        "Entry {} on {} {} ends at or before its start and was not counted",
                        entry_index + 1,
                        day.weekday(),
                        day.date
                    ),
                    severity: "low".to_string(),
                });
            }

            let worked_minutes = Decimal::from(daily.worked_minutes);
            let worked_hours = daily.hours;
            audit_trace.steps.push(daily.audit_step);

            let (daily_overtime_minutes, weekly_overtime_minutes) = if settings.overtime_enabled {
                let split = detect_overtime(
                    worked_minutes,
                    week_regular_minutes + worked_minutes,
                    settings.daily_overtime_threshold,
                    settings.weekly_overtime_threshold,
                    step_number,
                );
                step_number += 1;
                audit_trace.steps.push(split.audit_step);
                (split.daily_overtime_minutes, split.weekly_overtime_minutes)
            } else {
                (Decimal::ZERO, Decimal::ZERO)
            };

            let regular_minutes = worked_minutes - daily_overtime_minutes;
            let overtime_minutes = daily_overtime_minutes + weekly_overtime_minutes;

            let regular_hours = hours_from_minutes(regular_minutes);
            let daily_overtime = worked_hours - regular_hours;
            let weekly_overtime = hours_from_minutes(weekly_overtime_minutes);
            let overtime_hours = hours_from_minutes(overtime_minutes);
            let total_pay = calculate_day_pay(
                regular_hours,
                overtime_hours,
                settings.pay_rate,
                settings.overtime_multiplier,
            );

            week_worked_minutes += worked_minutes;
            week_regular_minutes += regular_minutes;
            week_overtime_minutes += overtime_minutes;
            week_gross += total_pay;

            days.push(DayHours {
                date: day.date,
                worked_hours,
                regular_hours,
                daily_overtime,
                weekly_overtime,
                overtime_hours,
                total_pay,
            });
        }

        let week_regular = hours_from_minutes(week_regular_minutes);
        let week_overtime = hours_from_minutes(week_overtime_minutes);

        debug!(
            employee_id = %employee.id,
            week = week_index + 1,
            week_start = ?week.start_date(),
            regular = %week_regular.normalize(),
            overtime = %week_overtime.normalize(),
            gross = %week_gross.normalize(),
            "Processed week"
        );

        weeks.push(WeekHours {
            days,
            week_worked: hours_from_minutes(week_worked_minutes),
            week_regular,
            week_overtime,
            week_gross,
        });
    }

    let totals = PeriodTotals::from_weeks(&weeks);

    Ok(PayPeriodHours {
        employee_id: employee.id,
        weeks,
        totals,
        audit_trace,
    })
}

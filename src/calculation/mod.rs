//! Calculation logic for the Time Card Engine.
//!
//! This module contains the pure functions that turn a time card into
//! figures: week and date arithmetic, clock time parsing, daily hours with
//! break deduction, daily and weekly overtime detection, day pay, the
//! per-employee aggregation that ties them together, display formatting,
//! and schedule generation.

mod daily_hours;
mod employee_hours;
mod formatting;
mod overtime;
mod pay;
mod schedule;
mod time_parsing;
mod week_dates;

pub use daily_hours::{DailyHoursResult, calculate_daily_hours};
pub use employee_hours::process_employee_hours;
pub use formatting::{decimal_to_hhmm, format_currency, format_decimal_hours};
pub use overtime::{
    DEFAULT_DAILY_OVERTIME_THRESHOLD, DEFAULT_WEEKLY_OVERTIME_THRESHOLD, OvertimeSplit,
    calculate_overtime,
};
pub use pay::calculate_day_pay;
pub use schedule::{create_employee, create_employee_today, generate_weeks, regenerate_schedule};
pub use time_parsing::parse_time;
pub use week_dates::{add_days, schedule_date, start_of_week};

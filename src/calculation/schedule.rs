//! Schedule generation for new and existing employees.
//!
//! A schedule is `pay_period_weeks` weeks of `days_per_week` days, starting
//! on the most recent configured week-start day. Day dates are always
//! `week_start + week_index * 7 + day_index`, so regenerating from the same
//! settings on the same day reproduces the same dates.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::config::Settings;
use crate::models::{Day, Employee, TimeEntry, Week};

use super::week_dates::{schedule_date, start_of_week};

/// Builds an empty schedule for the pay period containing `today`.
///
/// Each day gets `time_periods_per_day` empty entries and, when breaks are
/// auto-deducted, one empty break interval.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::generate_weeks;
/// use timecard_engine::config::Settings;
/// use chrono::NaiveDate;
///
/// let settings = Settings::default(); // 2 weeks of 5 days, starting Sunday
/// let today = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
///
/// let weeks = generate_weeks(&settings, today);
/// assert_eq!(weeks.len(), 2);
/// assert_eq!(weeks[0].days.len(), 5);
/// assert_eq!(weeks[0].days[0].date, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
/// assert_eq!(weeks[1].days[0].date, NaiveDate::from_ymd_opt(2026, 10, 25).unwrap());
/// ```
pub fn generate_weeks(settings: &Settings, today: NaiveDate) -> Vec<Week> {
    let week_start = start_of_week(today, settings.week_starts_on);

    (0..usize::from(settings.pay_period_weeks))
        .map(|week_index| Week {
            days: (0..usize::from(settings.days_per_week))
                .map(|day_index| empty_day(settings, schedule_date(week_start, week_index, day_index)))
                .collect(),
        })
        .collect()
}

fn empty_day(settings: &Settings, date: NaiveDate) -> Day {
    let mut day = Day::new(date);
    day.entries = vec![TimeEntry::default(); usize::from(settings.time_periods_per_day)];
    if settings.auto_deduct_breaks {
        day.breaks.push(TimeEntry::default());
    }
    day
}

/// Creates an unnamed employee with a fresh id and an empty schedule.
///
/// The start date is `today`.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::create_employee;
/// use timecard_engine::config::Settings;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let employee = create_employee(&Settings::default(), today);
///
/// assert!(employee.name.is_empty());
/// assert_eq!(employee.start_date, today);
/// assert_eq!(employee.weeks.len(), 2);
/// ```
pub fn create_employee(settings: &Settings, today: NaiveDate) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        name: String::new(),
        start_date: today,
        weeks: generate_weeks(settings, today),
    }
}

/// Creates an employee using the local calendar date as `today`.
pub fn create_employee_today(settings: &Settings) -> Employee {
    create_employee(settings, Local::now().date_naive())
}

/// Returns a copy of `employee` with a schedule rebuilt from `settings`.
///
/// Identity, name and start date carry over; every week is replaced, so any
/// entered times are discarded.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::{create_employee, regenerate_schedule};
/// use timecard_engine::config::Settings;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let mut employee = create_employee(&Settings::default(), today);
/// employee.name = "Dana Reyes".to_string();
///
/// let weekly = Settings { pay_period_weeks: 1, days_per_week: 7, ..Settings::default() };
/// let regenerated = regenerate_schedule(&employee, &weekly, today);
///
/// assert_eq!(regenerated.id, employee.id);
/// assert_eq!(regenerated.name, "Dana Reyes");
/// assert_eq!(regenerated.weeks.len(), 1);
/// assert_eq!(regenerated.weeks[0].days.len(), 7);
/// ```
pub fn regenerate_schedule(employee: &Employee, settings: &Settings, today: NaiveDate) -> Employee {
    Employee {
        id: employee.id,
        name: employee.name.clone(),
        start_date: employee.start_date,
        weeks: generate_weeks(settings, today),
    }
}

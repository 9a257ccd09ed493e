//! Time card export rows.
//!
//! Turns processed hours into the strings a document renderer lays out: one
//! table per week with a row per day, followed by period totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::calculation::{
    decimal_to_hhmm, format_currency, format_decimal_hours, process_employee_hours,
};
use crate::config::Settings;
use crate::error::EngineResult;
use crate::models::{DayHours, Employee, PayPeriodHours};

/// Column headers of each week's table.
pub const TIME_CARD_HEADERS: [&str; 4] = ["Date", "Dec Hours", "hh:mm", "Pay"];

/// Format used for dates in exported rows.
pub const EXPORT_DATE_FORMAT: &str = "%m/%d/%Y";

/// One day's row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    /// The calendar date.
    pub date: NaiveDate,
    /// Hours worked.
    pub decimal_hours: Decimal,
    /// Hours worked with two decimal places, e.g. `"8.50"`.
    pub decimal_display: String,
    /// Hours worked as `"H:MM"`.
    pub hhmm: String,
    /// Pay for the day, e.g. `"$127.50"`.
    pub pay: String,
}

impl ExportRow {
    fn from_day(day: &DayHours) -> Self {
        Self {
            date: day.date,
            decimal_hours: day.worked_hours,
            decimal_display: format_decimal_hours(day.worked_hours),
            hhmm: decimal_to_hhmm(day.worked_hours),
            pay: format_currency(day.total_pay),
        }
    }

    /// Returns the row's cells in [`TIME_CARD_HEADERS`] order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.date.format(EXPORT_DATE_FORMAT).to_string(),
            self.decimal_display.clone(),
            self.hhmm.clone(),
            self.pay.clone(),
        ]
    }
}

/// One week's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportWeek {
    /// Week number within the pay period, starting at 1.
    pub week_number: usize,
    /// Day rows in order.
    pub rows: Vec<ExportRow>,
}

/// Totals printed beneath the weekly tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTotals {
    /// Hours worked across the pay period.
    pub decimal_hours: Decimal,
    /// Hours worked with two decimal places.
    pub decimal_display: String,
    /// Hours worked as `"H:MM"`.
    pub hhmm: String,
    /// Gross pay across the pay period.
    pub gross_pay: Decimal,
    /// Gross pay as dollars and cents.
    pub gross_pay_display: String,
}

/// Everything needed to render one employee's block of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCardExport {
    /// The employee the card belongs to.
    pub employee_id: Uuid,
    /// Name to print, `"Unnamed"` when none was entered.
    pub employee_name: String,
    /// The employee's start date.
    pub start_date: NaiveDate,
    /// Weekly tables in order.
    pub weeks: Vec<ExportWeek>,
    /// Period totals.
    pub totals: ExportTotals,
}

/// Processes an employee's hours and lays them out as export rows.
///
/// Each row shows the hours worked that day and the day's total pay,
/// including any overtime premium.
///
/// # Errors
///
/// Returns an error if a filled-in entry holds a time that cannot be parsed.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::create_employee;
/// use timecard_engine::config::Settings;
/// use timecard_engine::export::build_time_card;
/// use timecard_engine::models::{Meridiem, TimeEntry};
/// use chrono::NaiveDate;
///
/// let settings = Settings { pay_period_weeks: 1, ..Settings::default() };
/// let mut employee = create_employee(&settings, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
/// employee.weeks[0].days[1].entries[0] =
///     TimeEntry::new("9:00", Meridiem::Am, "5:30", Meridiem::Pm);
///
/// let card = build_time_card(&employee, &settings).unwrap();
/// assert_eq!(card.employee_name, "Unnamed");
/// assert_eq!(card.weeks[0].rows[1].cells(), ["10/19/2026", "8.50", "8:30", "$127.50"]);
/// assert_eq!(card.totals.gross_pay_display, "$127.50");
/// ```
pub fn build_time_card(employee: &Employee, settings: &Settings) -> EngineResult<TimeCardExport> {
    let hours = process_employee_hours(employee, settings)?;
    Ok(lay_out(employee, &hours))
}

/// Builds export blocks for a list of employees, in order.
pub fn build_time_cards(
    employees: &[Employee],
    settings: &Settings,
) -> EngineResult<Vec<TimeCardExport>> {
    let cards = employees
        .iter()
        .map(|employee| build_time_card(employee, settings))
        .collect::<EngineResult<Vec<_>>>()?;

    debug!(cards = cards.len(), "Built time card export");
    Ok(cards)
}

fn lay_out(employee: &Employee, hours: &PayPeriodHours) -> TimeCardExport {
    let weeks = hours
        .weeks
        .iter()
        .enumerate()
        .map(|(index, week)| ExportWeek {
            week_number: index + 1,
            rows: week.days.iter().map(ExportRow::from_day).collect(),
        })
        .collect();

    let totals = ExportTotals {
        decimal_hours: hours.totals.worked_hours,
        decimal_display: format_decimal_hours(hours.totals.worked_hours),
        hhmm: decimal_to_hhmm(hours.totals.worked_hours),
        gross_pay: hours.totals.gross_pay,
        gross_pay_display: format_currency(hours.totals.gross_pay),
    };

    TimeCardExport {
        employee_id: employee.id,
        employee_name: employee.display_name().to_string(),
        start_date: employee.start_date,
        weeks,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::create_employee;
    use crate::config::TimeNotation;
    use crate::models::TimeEntry;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn settings() -> Settings {
        Settings {
            time_notation: TimeNotation::TwentyFourHour,
            pay_period_weeks: 2,
            days_per_week: 5,
            overtime_enabled: true,
            ..Settings::default()
        }
    }

    #[test]
    fn test_rows_per_week_and_numbering() {
        let employee = create_employee(&settings(), today());
        let card = build_time_card(&employee, &settings()).unwrap();

        assert_eq!(card.weeks.len(), 2);
        assert_eq!(card.weeks[0].week_number, 1);
        assert_eq!(card.weeks[1].week_number, 2);
        assert!(card.weeks.iter().all(|w| w.rows.len() == 5));
        assert_eq!(card.weeks[0].rows[0].cells()[1], "0.00");
        assert_eq!(card.weeks[0].rows[0].cells()[2], "0:00");
        assert_eq!(card.weeks[0].rows[0].cells()[3], "$0.00");
    }

    #[test]
    fn test_overtime_day_row_shows_worked_hours_and_premium_pay() {
        let mut employee = create_employee(&settings(), today());
        employee.weeks[0].days[0].entries[0] = TimeEntry::hours24("7:00", "17:15");

        let card = build_time_card(&employee, &settings()).unwrap();
        let row = &card.weeks[0].rows[0];

        // 10.25 hours: 8 regular, 2.25 daily overtime
        assert_eq!(row.decimal_hours, dec("10.25"));
        assert_eq!(row.decimal_display, "10.25");
        assert_eq!(row.hhmm, "10:15");
        // 8 * 15 + 2.25 * 22.5 = 170.625
        assert_eq!(row.pay, "$170.63");
    }

    #[test]
    fn test_totals_span_all_weeks() {
        let mut employee = create_employee(&settings(), today());
        employee.name = "Dana Reyes".to_string();
        employee.weeks[0].days[0].entries[0] = TimeEntry::hours24("9:00", "17:00");
        employee.weeks[1].days[2].entries[0] = TimeEntry::hours24("9:00", "13:20");

        let card = build_time_card(&employee, &settings()).unwrap();

        assert_eq!(card.employee_name, "Dana Reyes");
        assert_eq!(card.totals.decimal_display, "12.33");
        assert_eq!(card.totals.hhmm, "12:20");
        assert_eq!(card.totals.gross_pay_display, "$185.00");
    }

    #[test]
    fn test_build_time_cards_keeps_order() {
        let mut first = create_employee(&settings(), today());
        first.name = "First".to_string();
        let mut second = create_employee(&settings(), today());
        second.name = "Second".to_string();

        let cards = build_time_cards(&[first, second], &settings()).unwrap();
        let names: Vec<_> = cards.iter().map(|c| c.employee_name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_build_time_cards_stops_on_bad_entry() {
        let mut employee = create_employee(&settings(), today());
        employee.weeks[0].days[0].entries[0] = TimeEntry::hours24("7", "17:00");

        assert!(build_time_cards(&[employee], &settings()).is_err());
    }

    #[test]
    fn test_headers() {
        assert_eq!(TIME_CARD_HEADERS, ["Date", "Dec Hours", "hh:mm", "Pay"]);
    }

    #[test]
    fn test_export_serializes_for_renderer() {
        let employee = create_employee(&settings(), today());
        let card = build_time_card(&employee, &settings()).unwrap();

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["totals"]["gross_pay_display"], "$0.00");
        assert_eq!(json["weeks"][0]["rows"][0]["date"], "2026-10-18");
    }
}

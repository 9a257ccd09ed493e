//! Property tests for the time computation functions.

use chrono::{NaiveDate, Timelike};
use proptest::prelude::*;
use rust_decimal::Decimal;

use timecard_engine::calculation::{
    calculate_daily_hours, calculate_overtime, create_employee, decimal_to_hhmm, parse_time,
    process_employee_hours,
};
use timecard_engine::config::{Settings, TimeNotation};
use timecard_engine::models::{Meridiem, TimeEntry};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn clock24(minute_of_day: u32) -> String {
    format!("{}:{:02}", minute_of_day / 60, minute_of_day % 60)
}

fn clock12(minute_of_day: u32) -> (String, Meridiem) {
    let hour = minute_of_day / 60;
    let period = if hour < 12 { Meridiem::Am } else { Meridiem::Pm };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    (format!("{}:{:02}", display_hour, minute_of_day % 60), period)
}

fn daily_hours(entries: &[TimeEntry]) -> Decimal {
    calculate_daily_hours(entries, &[], date(), TimeNotation::TwentyFourHour, 0, false, 1)
        .unwrap()
        .hours
}

proptest! {
    #[test]
    fn forward_pair_counts_exact_span(start in 0u32..1439, len in 1u32..1440) {
        let end = (start + len).min(1439);
        prop_assume!(end > start);

        let hours = daily_hours(&[TimeEntry::hours24(clock24(start), clock24(end))]);
        prop_assert_eq!(hours, Decimal::from(end - start) / Decimal::from(60));
    }

    #[test]
    fn reversed_or_equal_pair_counts_zero(a in 0u32..1440, b in 0u32..1440) {
        let (start, end) = if a >= b { (a, b) } else { (b, a) };

        let hours = daily_hours(&[TimeEntry::hours24(clock24(start), clock24(end))]);
        prop_assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn twelve_hour_matches_twenty_four_hour(minute_of_day in 0u32..1440) {
        let (text, period) = clock12(minute_of_day);

        let t = parse_time(&text, period, date(), TimeNotation::TwelveHour).unwrap();
        prop_assert_eq!(t.hour() * 60 + t.minute(), minute_of_day);
    }

    #[test]
    fn hhmm_of_whole_minutes_round_trips(minutes in 0u32..100_000) {
        let hours = Decimal::from(minutes) / Decimal::from(60);
        prop_assert_eq!(
            decimal_to_hhmm(hours),
            format!("{}:{:02}", minutes / 60, minutes % 60)
        );
    }

    #[test]
    fn overtime_never_negative(daily in 0u32..1440, prior in 0u32..4000) {
        let daily = Decimal::from(daily) / Decimal::from(60);
        let cumulative = Decimal::from(prior) / Decimal::from(60) + daily;

        let split = calculate_overtime(daily, cumulative, Decimal::from(8), Decimal::from(40), 1);
        prop_assert!(split.daily_overtime >= Decimal::ZERO);
        prop_assert!(split.weekly_overtime >= Decimal::ZERO);
        prop_assert!(split.daily_overtime <= daily);
    }

    #[test]
    fn processing_is_pure(spans in proptest::collection::vec((0u32..720, 0u32..720), 5)) {
        let settings = Settings {
            time_notation: TimeNotation::TwentyFourHour,
            pay_period_weeks: 1,
            overtime_enabled: true,
            ..Settings::default()
        };
        let mut employee = create_employee(&settings, date());
        for (day, (start, len)) in employee.weeks[0].days.iter_mut().zip(spans) {
            day.entries[0] = TimeEntry::hours24(clock24(start), clock24(start + len));
        }

        let first = process_employee_hours(&employee, &settings).unwrap();
        let second = process_employee_hours(&employee, &settings).unwrap();

        for day in &first.weeks[0].days {
            prop_assert_eq!(day.regular_hours + day.daily_overtime, day.worked_hours);
        }
        prop_assert_eq!(first, second);
    }
}

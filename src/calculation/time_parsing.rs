//! Parsing of entered clock times.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::TimeNotation;
use crate::error::{EngineError, EngineResult};
use crate::models::Meridiem;

/// Resolves an entered `"H:MM"` or `"HH:MM"` time to a timestamp on
/// `reference_date`.
///
/// Under 12-hour notation a PM marker adds 12 to hours below 12, and an AM
/// marker turns hour 12 into midnight. The marker is ignored under 24-hour
/// notation. Seconds are always zero.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeString`] when the string has no `:`,
/// either part is not a number, or the resolved hour and minute do not form
/// a clock time.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::parse_time;
/// use timecard_engine::config::TimeNotation;
/// use timecard_engine::models::Meridiem;
/// use chrono::{NaiveDate, Timelike};
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
///
/// let t = parse_time("5:30", Meridiem::Pm, date, TimeNotation::TwelveHour).unwrap();
/// assert_eq!((t.hour(), t.minute()), (17, 30));
///
/// let t = parse_time("12:15", Meridiem::Am, date, TimeNotation::TwelveHour).unwrap();
/// assert_eq!((t.hour(), t.minute()), (0, 15));
///
/// let t = parse_time("5:30", Meridiem::Pm, date, TimeNotation::TwentyFourHour).unwrap();
/// assert_eq!((t.hour(), t.minute()), (5, 30));
/// ```
pub fn parse_time(
    time: &str,
    period: Meridiem,
    reference_date: NaiveDate,
    notation: TimeNotation,
) -> EngineResult<NaiveDateTime> {
    let (hour_part, minute_part) = time
        .split_once(':')
        .ok_or_else(|| invalid(time, "expected H:MM"))?;

    let mut hours: u32 = hour_part
        .trim()
        .parse()
        .map_err(|_| invalid(time, "hour is not a number"))?;
    let minutes: u32 = minute_part
        .trim()
        .parse()
        .map_err(|_| invalid(time, "minute is not a number"))?;

    if notation == TimeNotation::TwelveHour {
        match period {
            Meridiem::Pm if hours < 12 => hours += 12,
            Meridiem::Am if hours == 12 => hours = 0,
            _ => {}
        }
    }

    let clock = NaiveTime::from_hms_opt(hours, minutes, 0)
        .ok_or_else(|| invalid(time, "not a valid time of day"))?;

    Ok(reference_date.and_time(clock))
}

fn invalid(time: &str, message: &str) -> EngineError {
    EngineError::InvalidTimeString {
        value: time.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn hm(time: &str, period: Meridiem, notation: TimeNotation) -> (u32, u32) {
        let t = parse_time(time, period, date(), notation).unwrap();
        (t.hour(), t.minute())
    }

    #[test]
    fn test_twelve_hour_morning() {
        assert_eq!(hm("9:00", Meridiem::Am, TimeNotation::TwelveHour), (9, 0));
        assert_eq!(hm("09:45", Meridiem::Am, TimeNotation::TwelveHour), (9, 45));
    }

    #[test]
    fn test_twelve_hour_afternoon() {
        assert_eq!(hm("1:05", Meridiem::Pm, TimeNotation::TwelveHour), (13, 5));
        assert_eq!(hm("11:59", Meridiem::Pm, TimeNotation::TwelveHour), (23, 59));
    }

    #[test]
    fn test_noon_and_midnight() {
        assert_eq!(hm("12:00", Meridiem::Pm, TimeNotation::TwelveHour), (12, 0));
        assert_eq!(hm("12:00", Meridiem::Am, TimeNotation::TwelveHour), (0, 0));
    }

    #[test]
    fn test_twenty_four_hour_ignores_marker() {
        assert_eq!(hm("17:30", Meridiem::Am, TimeNotation::TwentyFourHour), (17, 30));
        assert_eq!(hm("12:00", Meridiem::Am, TimeNotation::TwentyFourHour), (12, 0));
        assert_eq!(hm("0:15", Meridiem::Pm, TimeNotation::TwentyFourHour), (0, 15));
    }

    #[test]
    fn test_timestamp_lands_on_reference_date_with_zero_seconds() {
        let t = parse_time("5:00", Meridiem::Pm, date(), TimeNotation::TwelveHour).unwrap();
        assert_eq!(t.date(), date());
        assert_eq!(t.second(), 0);
        assert_eq!(t.nanosecond(), 0);
    }

    #[test]
    fn test_missing_separator_is_error() {
        let result = parse_time("900", Meridiem::Am, date(), TimeNotation::TwelveHour);
        match result {
            Err(EngineError::InvalidTimeString { value, message }) => {
                assert_eq!(value, "900");
                assert_eq!(message, "expected H:MM");
            }
            other => panic!("Expected InvalidTimeString, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_parts_are_errors() {
        assert!(parse_time("ab:00", Meridiem::Am, date(), TimeNotation::TwelveHour).is_err());
        assert!(parse_time("9:xx", Meridiem::Am, date(), TimeNotation::TwelveHour).is_err());
        assert!(parse_time(":", Meridiem::Am, date(), TimeNotation::TwelveHour).is_err());
    }

    #[test]
    fn test_out_of_range_clock_is_error() {
        assert!(parse_time("24:00", Meridiem::Am, date(), TimeNotation::TwentyFourHour).is_err());
        assert!(parse_time("9:60", Meridiem::Am, date(), TimeNotation::TwentyFourHour).is_err());
        assert!(parse_time("-1:00", Meridiem::Am, date(), TimeNotation::TwentyFourHour).is_err());
    }
}

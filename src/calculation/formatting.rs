//! Conversions of decimal hours and pay into display strings.
//!
//! All rounding here is half away from zero, matching how amounts are shown
//! on printed time cards. Negative hours are shown as zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts decimal hours to an `"H:MM"` clock-style string.
///
/// The fractional part is rounded to the nearest minute. When that rounds up
/// to 60 the minute carries into the hour, so `7.999` becomes `"8:00"`.
/// Hours are not zero-padded.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::decimal_to_hhmm;
/// use rust_decimal::Decimal;
///
/// assert_eq!(decimal_to_hhmm(Decimal::new(85, 1)), "8:30");
/// assert_eq!(decimal_to_hhmm(Decimal::new(8, 0)), "8:00");
/// assert_eq!(decimal_to_hhmm(Decimal::new(7999, 3)), "8:00");
/// assert_eq!(decimal_to_hhmm(Decimal::new(4025, 2)), "40:15");
/// ```
pub fn decimal_to_hhmm(decimal_hours: Decimal) -> String {
    let hours = decimal_hours.max(Decimal::ZERO);
    let whole = hours.trunc();

    let minutes = ((hours - whole) * Decimal::new(60, 0))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0);
    let whole = whole.to_u64().unwrap_or(0);

    let (whole, minutes) = if minutes >= 60 {
        (whole + 1, minutes - 60)
    } else {
        (whole, minutes)
    };

    format!("{}:{:02}", whole, minutes)
}

/// Formats decimal hours with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::format_decimal_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_decimal_hours(Decimal::new(85, 1)), "8.50");
/// assert_eq!(format_decimal_hours(Decimal::new(40, 0)), "40.00");
/// ```
pub fn format_decimal_hours(hours: Decimal) -> String {
    format!("{:.2}", round_cents(hours.max(Decimal::ZERO)))
}

/// Formats an amount as dollars and cents.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(600, 0)), "$600.00");
/// assert_eq!(format_currency(Decimal::new(1234565, 4)), "$123.46");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", round_cents(amount))
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

//! Day pay calculation.

use rust_decimal::Decimal;

/// Calculates the pay for one day.
///
/// Regular hours are paid at `pay_rate`; overtime hours at
/// `pay_rate * overtime_multiplier`. No rounding is applied here; amounts are
/// rounded only when formatted.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::calculate_day_pay;
/// use rust_decimal::Decimal;
///
/// // 8 regular + 2 overtime hours at $15.00, 1.5x
/// let pay = calculate_day_pay(
///     Decimal::new(8, 0),
///     Decimal::new(2, 0),
///     Decimal::new(15, 0),
///     Decimal::new(15, 1),
/// );
/// assert_eq!(pay, Decimal::new(165, 0));
/// ```
pub fn calculate_day_pay(
    regular_hours: Decimal,
    overtime_hours: Decimal,
    pay_rate: Decimal,
    overtime_multiplier: Decimal,
) -> Decimal {
    regular_hours * pay_rate + overtime_hours * pay_rate * overtime_multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_regular_only() {
        assert_eq!(
            calculate_day_pay(dec("8"), Decimal::ZERO, dec("15"), dec("1.5")),
            dec("120")
        );
    }

    #[test]
    fn test_overtime_only() {
        assert_eq!(
            calculate_day_pay(Decimal::ZERO, dec("4"), dec("20"), dec("2")),
            dec("160")
        );
    }

    #[test]
    fn test_fractional_hours_keep_full_precision() {
        // 7.75 * 18.40 + 0.25 * 18.40 * 1.5
        assert_eq!(
            calculate_day_pay(dec("7.75"), dec("0.25"), dec("18.40"), dec("1.5")),
            dec("149.50")
        );
    }

    #[test]
    fn test_zero_rate_pays_nothing() {
        assert_eq!(
            calculate_day_pay(dec("8"), dec("2"), Decimal::ZERO, dec("1.5")),
            Decimal::ZERO
        );
    }
}

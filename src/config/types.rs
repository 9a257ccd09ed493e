//! Settings types for time card computation.
//!
//! This module contains the strongly-typed settings structure that is
//! deserialized from YAML files or built directly by callers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DEFAULT_DAILY_OVERTIME_THRESHOLD, DEFAULT_WEEKLY_OVERTIME_THRESHOLD};
use crate::error::{EngineError, EngineResult};

/// The notation used for time-of-day strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeNotation {
    /// 12-hour clock with an AM/PM marker.
    TwelveHour,
    /// 24-hour clock; markers are ignored.
    TwentyFourHour,
}

/// Process-wide settings for a computation pass.
///
/// Missing fields fall back to [`Settings::default`] when deserializing.
///
/// # Example
///
/// ```
/// use timecard_engine::config::{Settings, TimeNotation};
/// use rust_decimal::Decimal;
///
/// let settings = Settings::default();
/// assert_eq!(settings.time_notation, TimeNotation::TwelveHour);
/// assert_eq!(settings.pay_period_weeks, 2);
/// assert_eq!(settings.days_per_week, 5);
/// assert_eq!(settings.pay_rate, Decimal::new(15, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How clock times are written.
    pub time_notation: TimeNotation,
    /// Number of weeks in a pay period (1-4).
    pub pay_period_weeks: u8,
    /// Number of days tracked per week (1-7).
    pub days_per_week: u8,
    /// Weekday each week starts on, Sunday = 0 through Saturday = 6.
    pub week_starts_on: u8,
    /// Number of empty time entries generated for each day.
    pub time_periods_per_day: u8,
    /// Whether a flat break length is deducted from every day.
    pub auto_deduct_breaks: bool,
    /// Break length in minutes, deducted once per day.
    pub break_minutes: u32,
    /// Whether overtime rules apply at all.
    pub overtime_enabled: bool,
    /// Hours per day after which daily overtime starts.
    pub daily_overtime_threshold: Decimal,
    /// Hours per week after which weekly overtime starts.
    pub weekly_overtime_threshold: Decimal,
    /// Multiplier applied to the pay rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Base hourly pay rate.
    pub pay_rate: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_notation: TimeNotation::TwelveHour,
            pay_period_weeks: 2,
            days_per_week: 5,
            week_starts_on: 0,
            time_periods_per_day: 2,
            auto_deduct_breaks: false,
            break_minutes: 0,
            overtime_enabled: false,
            daily_overtime_threshold: DEFAULT_DAILY_OVERTIME_THRESHOLD,
            weekly_overtime_threshold: DEFAULT_WEEKLY_OVERTIME_THRESHOLD,
            overtime_multiplier: Decimal::new(15, 1),
            pay_rate: Decimal::new(15, 0),
        }
    }
}

impl Settings {
    /// Checks every field against its documented bounds.
    ///
    /// Engine functions never call this; out-of-range settings passed to them
    /// produce degenerate schedules instead of errors. The settings loader
    /// validates everything it reads.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::config::Settings;
    ///
    /// let mut settings = Settings::default();
    /// assert!(settings.validate().is_ok());
    ///
    /// settings.days_per_week = 8;
    /// assert!(settings.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        check_range("pay_period_weeks", self.pay_period_weeks, 1, 4)?;
        check_range("days_per_week", self.days_per_week, 1, 7)?;
        check_range("week_starts_on", self.week_starts_on, 0, 6)?;
        check_range("time_periods_per_day", self.time_periods_per_day, 1, u8::MAX)?;

        for (field, value) in [
            ("daily_overtime_threshold", self.daily_overtime_threshold),
            ("weekly_overtime_threshold", self.weekly_overtime_threshold),
            ("overtime_multiplier", self.overtime_multiplier),
            ("pay_rate", self.pay_rate),
        ] {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::InvalidSettings {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        Ok(())
    }

    /// Returns true if switching to `other` changes the shape of generated
    /// schedules, meaning existing employee weeks must be regenerated.
    pub fn schedule_shape_differs(&self, other: &Settings) -> bool {
        self.pay_period_weeks != other.pay_period_weeks
            || self.days_per_week != other.days_per_week
            || self.week_starts_on != other.week_starts_on
            || self.time_periods_per_day != other.time_periods_per_day
            || self.auto_deduct_breaks != other.auto_deduct_breaks
    }
}

fn check_range(field: &str, value: u8, min: u8, max: u8) -> EngineResult<()> {
    if value < min || value > max {
        return Err(EngineError::InvalidSettings {
            field: field.to_string(),
            message: format!("must be between {} and {}, got {}", min, max, value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass_validation() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_default_thresholds_come_from_overtime_constants() {
        let settings = Settings::default();
        assert_eq!(settings.daily_overtime_threshold, DEFAULT_DAILY_OVERTIME_THRESHOLD);
        assert_eq!(settings.weekly_overtime_threshold, DEFAULT_WEEKLY_OVERTIME_THRESHOLD);
        assert_eq!(settings.daily_overtime_threshold, Decimal::new(8, 0));
    }

    #[test]
    fn test_zero_days_per_week_rejected() {
        let settings = Settings {
            days_per_week: 0,
            ..Settings::default()
        };

        match settings.validate() {
            Err(EngineError::InvalidSettings { field, .. }) => {
                assert_eq!(field, "days_per_week");
            }
            other => panic!("Expected InvalidSettings, got {:?}", other),
        }
    }

    #[test]
    fn test_five_week_pay_period_rejected() {
        let settings = Settings {
            pay_period_weeks: 5,
            ..Settings::default()
        };

        match settings.validate() {
            Err(EngineError::InvalidSettings { field, message }) => {
                assert_eq!(field, "pay_period_weeks");
                assert_eq!(message, "must be between 1 and 4, got 5");
            }
            other => panic!("Expected InvalidSettings, got {:?}", other),
        }
    }

    #[test]
    fn test_week_start_out_of_range_rejected() {
        let settings = Settings {
            week_starts_on: 7,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_negative_pay_rate_rejected() {
        let settings = Settings {
            pay_rate: Decimal::new(-1, 0),
            ..Settings::default()
        };

        match settings.validate() {
            Err(EngineError::InvalidSettings { field, .. }) => assert_eq!(field, "pay_rate"),
            other => panic!("Expected InvalidSettings, got {:?}", other),
        }
    }

    #[test]
    fn test_schedule_shape_ignores_pay_fields() {
        let base = Settings::default();
        let changed = Settings {
            pay_rate: Decimal::new(20, 0),
            overtime_enabled: true,
            break_minutes: 30,
            ..base.clone()
        };
        assert!(!base.schedule_shape_differs(&changed));
    }

    #[test]
    fn test_schedule_shape_detects_days_and_breaks() {
        let base = Settings::default();

        let more_days = Settings {
            days_per_week: 7,
            ..base.clone()
        };
        assert!(base.schedule_shape_differs(&more_days));

        let with_breaks = Settings {
            auto_deduct_breaks: true,
            ..base.clone()
        };
        assert!(base.schedule_shape_differs(&with_breaks));
    }

    #[test]
    fn test_time_notation_serialization() {
        assert_eq!(
            serde_json::to_string(&TimeNotation::TwelveHour).unwrap(),
            "\"twelve_hour\""
        );
        assert_eq!(
            serde_json::to_string(&TimeNotation::TwentyFourHour).unwrap(),
            "\"twenty_four_hour\""
        );
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let json = r#"{ "days_per_week": 7, "pay_rate": "22.50" }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.days_per_week, 7);
        assert_eq!(settings.pay_rate, Decimal::new(2250, 2));
        assert_eq!(settings.pay_period_weeks, 2);
        assert_eq!(settings.weekly_overtime_threshold, Decimal::new(40, 0));
    }
}

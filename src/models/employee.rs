//! Employee model.
//!
//! This module defines the [`Employee`] struct: an identity plus the weeks of
//! the time card being filled in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Week;

/// An employee and their time card for one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// Display name; empty until the user types one.
    #[serde(default)]
    pub name: String,
    /// The date the time card was started.
    pub start_date: NaiveDate,
    /// Weeks of the pay period in order.
    #[serde(default)]
    pub weeks: Vec<Week>,
}

impl Employee {
    /// Returns the name to show on exports, `"Unnamed"` when none was entered.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use uuid::Uuid;
    ///
    /// let mut employee = Employee {
    ///     id: Uuid::new_v4(),
    ///     name: String::new(),
    ///     start_date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
    ///     weeks: vec![],
    /// };
    /// assert_eq!(employee.display_name(), "Unnamed");
    ///
    /// employee.name = "Dana Reyes".to_string();
    /// assert_eq!(employee.display_name(), "Dana Reyes");
    /// ```
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() { "Unnamed" } else { trimmed }
    }
}

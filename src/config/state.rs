//! Saved versus edited settings.
//!
//! [`SettingsState`] tracks whether the settings being edited differ from the
//! ones the current employee schedules were generated from. Saving is an
//! explicit transition that hands back regenerated employees rather than
//! mutating shared state.

use chrono::NaiveDate;
use tracing::info;

use crate::calculation::regenerate_schedule;
use crate::models::Employee;

use super::types::Settings;

/// Whether a settings change is waiting to be saved.
///
/// # Example
///
/// ```
/// use timecard_engine::config::{Settings, SettingsState};
///
/// let state = SettingsState::new(Settings::default());
/// assert!(!state.is_pending());
///
/// let state = state.edit(|s| s.days_per_week = 7);
/// assert!(state.is_pending());
/// assert_eq!(state.current().days_per_week, 7);
/// assert_eq!(state.applied().days_per_week, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsState {
    /// The edited settings match the applied ones.
    Clean(Settings),
    /// The edited settings differ from the applied ones.
    Pending {
        /// Settings the existing schedules were generated from.
        applied: Settings,
        /// Settings as currently edited.
        draft: Settings,
    },
}

impl SettingsState {
    /// Starts in the clean state.
    pub fn new(settings: Settings) -> Self {
        Self::Clean(settings)
    }

    /// Returns the settings existing schedules were generated from.
    pub fn applied(&self) -> &Settings {
        match self {
            Self::Clean(settings) => settings,
            Self::Pending { applied, .. } => applied,
        }
    }

    /// Returns the settings as currently edited, which live calculations use.
    pub fn current(&self) -> &Settings {
        match self {
            Self::Clean(settings) => settings,
            Self::Pending { draft, .. } => draft,
        }
    }

    /// Returns true if there are unsaved edits.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Applies an edit to the draft settings.
    ///
    /// Editing back to the applied values returns to the clean state.
    pub fn edit(self, change: impl FnOnce(&mut Settings)) -> Self {
        let (applied, mut draft) = self.into_parts();
        change(&mut draft);

        if draft == applied {
            Self::Clean(applied)
        } else {
            Self::Pending { applied, draft }
        }
    }

    /// Drops unsaved edits.
    pub fn discard(self) -> Self {
        let (applied, _) = self.into_parts();
        Self::Clean(applied)
    }

    /// Saves the draft and returns the employees to use from now on.
    ///
    /// When the draft changes the shape of schedules (weeks, days, week
    /// start, entries per day, or break tracking), every employee gets a
    /// schedule regenerated for `today`, keeping identity and name. Other
    /// changes leave the employees' entries untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::calculation::create_employee;
    /// use timecard_engine::config::{Settings, SettingsState};
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    /// let employees = vec![create_employee(&Settings::default(), today)];
    ///
    /// let state = SettingsState::new(Settings::default()).edit(|s| s.pay_period_weeks = 1);
    /// let (state, employees) = state.save(&employees, today);
    ///
    /// assert!(!state.is_pending());
    /// assert_eq!(employees[0].weeks.len(), 1);
    /// ```
    pub fn save(self, employees: &[Employee], today: NaiveDate) -> (Self, Vec<Employee>) {
        let (applied, draft) = self.into_parts();

        let employees = if applied.schedule_shape_differs(&draft) {
            info!(
                employees = employees.len(),
                weeks = draft.pay_period_weeks,
                days_per_week = draft.days_per_week,
                "Regenerating schedules for new settings"
            );
            employees
                .iter()
                .map(|employee| regenerate_schedule(employee, &draft, today))
                .collect()
        } else {
            employees.to_vec()
        };

        (Self::Clean(draft), employees)
    }

    fn into_parts(self) -> (Settings, Settings) {
        match self {
            Self::Clean(settings) => (settings.clone(), settings),
            Self::Pending { applied, draft } => (applied, draft),
        }
    }
}

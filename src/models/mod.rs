//! Core data models for the Time Card Engine.
//!
//! This module contains the input records a time card is built from and the
//! computed figures produced by hour processing.

mod employee;
mod schedule;
mod time_card;
mod time_entry;

pub use employee::Employee;
pub use schedule::{Day, Week};
pub use time_card::{
    AuditStep, AuditTrace, AuditWarning, DayHours, PayPeriodHours, PeriodTotals, WeekHours,
};
pub use time_entry::{Meridiem, TimeEntry};

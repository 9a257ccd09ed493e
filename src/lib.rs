//! Time Card Engine
//!
//! This crate turns employee-entered clock-in/clock-out pairs into daily and
//! weekly hour totals, applies daily and weekly overtime rules, computes gross
//! pay, and produces the row data for a tabular time-card export.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;

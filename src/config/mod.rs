//! Settings loading and management for the Time Card Engine.
//!
//! This module provides the [`Settings`] record every calculation reads,
//! loading of settings from YAML files, and the [`SettingsState`] transition
//! between saved and edited settings.
//!
//! # Example
//!
//! ```no_run
//! use timecard_engine::config::SettingsLoader;
//!
//! let settings = SettingsLoader::load("./config/settings.yaml").unwrap().into_settings();
//! println!("Pay period: {} weeks", settings.pay_period_weeks);
//! ```

mod loader;
mod state;
mod types;

pub use loader::SettingsLoader;
pub use state::SettingsState;
pub use types::{Settings, TimeNotation};

//! Settings loading functionality.
//!
//! This module provides the [`SettingsLoader`] type for loading time card
//! settings from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::Settings;

/// Loads and validates time card settings.
///
/// Any field missing from the file takes its default value, so a file only
/// needs to name what it overrides:
///
/// ```text
/// time_notation: twenty_four_hour
/// days_per_week: 7
/// overtime_enabled: true
/// pay_rate: 22.50
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::SettingsLoader;
///
/// let loader = SettingsLoader::load("./config/settings.yaml").unwrap();
/// println!("Pay rate: ${}", loader.settings().pay_rate);
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    settings: Settings,
}

impl SettingsLoader {
    /// Loads settings from a YAML file.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or holds
    /// a value outside its documented bounds.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timecard_engine::config::SettingsLoader;
    ///
    /// let loader = SettingsLoader::load("./config/settings.yaml")?;
    /// # Ok::<(), timecard_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings = Self::parse(&content, &path_str)?;
        info!(path = %path_str, "Loaded time card settings");

        Ok(Self { settings })
    }

    /// Parses settings from YAML text that did not come from a file.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::config::SettingsLoader;
    ///
    /// let loader = SettingsLoader::from_yaml_str("days_per_week: 7").unwrap();
    /// assert_eq!(loader.settings().days_per_week, 7);
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let settings = Self::parse(content, "<inline>")?;
        Ok(Self { settings })
    }

    fn parse(content: &str, source: &str) -> EngineResult<Settings> {
        let settings: Settings =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consumes the loader and returns the settings.
    pub fn into_settings(self) -> Settings {
        self.settings
    }
}

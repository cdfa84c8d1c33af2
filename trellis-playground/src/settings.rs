//! User settings, stored as JSON in the config directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use trellis::prelude::{ComboboxVariant, DateError, DateValue};

use crate::error::PlaygroundError;
use crate::paths;

/// Colour scheme for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Everything the playground reads from `settings.json`.
///
/// Missing keys fall back to their defaults, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeMode,
    pub log_level: LogLevel,
    /// Fixed "today" for calendars. Uses the local date when unset.
    pub today: Option<NaiveDate>,
    /// Variant used by the plain `combobox` demo.
    pub combobox_variant: ComboboxVariant,
}

impl Settings {
    /// Load from the platform config directory.
    pub fn load() -> Result<Self, PlaygroundError> {
        match paths::settings_file() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("[settings] no home directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a file, using defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, PlaygroundError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("[settings] {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let settings = serde_json::from_str(&text)?;
        log::debug!("[settings] loaded {}", path.display());
        Ok(settings)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// Parse a `YYYY-MM-DD` date given on the command line.
pub fn parse_date(s: &str) -> Result<NaiveDate, PlaygroundError> {
    match DateValue::parse(s)? {
        DateValue::Date(date) => Ok(date),
        _ => Err(DateError::Format(s.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.today, None);
        assert_eq!(settings.combobox_variant, ComboboxVariant::ActiveDescendant);
    }

    #[test]
    fn test_full_file() {
        let settings: Settings = serde_json::from_str(
            r#"{
                "theme": "light",
                "log_level": "trace",
                "today": "2026-10-19",
                "combobox_variant": "roving-tabindex"
            }"#,
        )
        .unwrap();
        assert_eq!(settings.log_level.filter(), LevelFilter::Trace);
        assert_eq!(settings.today(), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert_eq!(settings.combobox_variant, ComboboxVariant::RovingTabindex);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("trellis-settings-does-not-exist.json");
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-10-19").unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
        );
        assert!(matches!(
            parse_date(""),
            Err(PlaygroundError::Date(DateError::Format(_)))
        ));
        assert!(matches!(
            parse_date("19/10/2026"),
            Err(PlaygroundError::Date(DateError::Format(_)))
        ));
    }
}

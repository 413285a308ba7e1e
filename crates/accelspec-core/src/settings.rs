//! Settings domain types and validation.
//!
//! Settings are read from key/value sources (process environment or a
//! `.env` file loaded by the adapter). This module does no I/O itself:
//! callers pass a lookup function.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment key selecting the output format.
pub const ENV_OUTPUT_FORMAT: &str = "ACCELSPEC_OUTPUT_FORMAT";

/// Environment key controlling whether unknown names are an error.
pub const ENV_FAIL_ON_UNKNOWN: &str = "ACCELSPEC_FAIL_ON_UNKNOWN";

/// Environment key holding the default log level.
pub const ENV_LOG_LEVEL: &str = "ACCELSPEC_LOG";

/// Default log level when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// How command output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(SettingsError::InvalidOutputFormat(s.to_string())),
        }
    }
}

/// Application settings structure.
///
/// All fields are optional to support layering and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output format for command results.
    pub output_format: Option<OutputFormat>,

    /// Whether looking up an unknown accelerator exits with an error.
    pub fail_on_unknown: Option<bool>,

    /// Log filter level (trace, debug, info, warn, error, off).
    pub log_level: Option<String>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            output_format: Some(OutputFormat::Text),
            fail_on_unknown: Some(true),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Read settings from a key/value source.
    ///
    /// Missing keys stay `None`. Present but malformed values are errors.
    pub fn from_source<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_format = lookup(ENV_OUTPUT_FORMAT)
            .map(|value| value.parse::<OutputFormat>())
            .transpose()?;

        let fail_on_unknown = lookup(ENV_FAIL_ON_UNKNOWN)
            .map(|value| parse_flag(ENV_FAIL_ON_UNKNOWN, &value))
            .transpose()?;

        let log_level = lookup(ENV_LOG_LEVEL).map(|value| value.trim().to_ascii_lowercase());

        let settings = Self {
            output_format,
            fail_on_unknown,
            log_level,
        };
        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Get the effective output format (with default fallback).
    #[must_use]
    pub fn effective_output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Get the effective unknown-name policy (with default fallback).
    #[must_use]
    pub fn effective_fail_on_unknown(&self) -> bool {
        self.fail_on_unknown.unwrap_or(true)
    }

    /// Get the effective log level (with default fallback).
    #[must_use]
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &Self) {
        if let Some(format) = other.output_format {
            self.output_format = Some(format);
        }
        if let Some(fail) = other.fail_on_unknown {
            self.fail_on_unknown = Some(fail);
        }
        if let Some(ref level) = other.log_level {
            self.log_level = Some(level.clone());
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Output format must be 'text' or 'json', got '{0}'")]
    InvalidOutputFormat(String),

    #[error("Log level must be one of trace, debug, info, warn, error, off; got '{0}'")]
    InvalidLogLevel(String),

    #[error("{key} must be a boolean (true/false), got '{value}'")]
    InvalidFlag { key: &'static str, value: String },
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(ref level) = settings.log_level
        && !LOG_LEVELS.contains(&level.as_str())
    {
        return Err(SettingsError::InvalidLogLevel(level.clone()));
    }
    Ok(())
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, SettingsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_source_yields_defaults() {
        let settings = Settings::from_source(source(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.effective_output_format(), OutputFormat::Text);
        assert!(settings.effective_fail_on_unknown());
        assert_eq!(settings.effective_log_level(), "warn");
    }

    #[test]
    fn test_source_values_are_parsed() {
        let settings = Settings::from_source(source(&[
            (ENV_OUTPUT_FORMAT, "JSON"),
            (ENV_FAIL_ON_UNKNOWN, "no"),
            (ENV_LOG_LEVEL, "Debug"),
        ]))
        .unwrap();
        assert_eq!(settings.output_format, Some(OutputFormat::Json));
        assert_eq!(settings.fail_on_unknown, Some(false));
        assert_eq!(settings.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert_eq!(
            Settings::from_source(source(&[(ENV_OUTPUT_FORMAT, "yaml")])),
            Err(SettingsError::InvalidOutputFormat("yaml".to_string()))
        );
        assert_eq!(
            Settings::from_source(source(&[(ENV_FAIL_ON_UNKNOWN, "maybe")])),
            Err(SettingsError::InvalidFlag {
                key: ENV_FAIL_ON_UNKNOWN,
                value: "maybe".to_string()
            })
        );
        assert_eq!(
            Settings::from_source(source(&[(ENV_LOG_LEVEL, "loud")])),
            Err(SettingsError::InvalidLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn test_merge_only_overrides_present_fields() {
        let mut settings = Settings::with_defaults();
        settings.merge(&Settings {
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        });
        assert_eq!(settings.output_format, Some(OutputFormat::Json));
        assert_eq!(settings.fail_on_unknown, Some(true));
        assert_eq!(settings.log_level.as_deref(), Some(DEFAULT_LOG_LEVEL));
    }
}

//! Configuration loading for the alien clock
//!
//! Supports a JSON configuration file for:
//! - Start time of the clock
//! - Tick cadence and time scale
//! - Terminal behaviour (screen clearing, alarm bell)
//!
//! Every field has a default, so an empty object `{}` is a valid config.
//! Environment variables override the file after loading.

use alien_calendar::AlienDateTime;
use alien_clock::TimeScale;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Overrides the tick interval (milliseconds)
pub const ENV_TICK_MS: &str = "ALIEN_CLOCK_TICK_MS";
/// Overrides the number of ticks before exiting
pub const ENV_MAX_TICKS: &str = "ALIEN_CLOCK_MAX_TICKS";

/// Root configuration for the clock runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Alien time the clock starts at
    #[serde(default)]
    pub start: AlienDateTime,

    /// Real milliseconds per alien second at normal speed
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    #[serde(default)]
    pub time_scale: TimeScale,

    /// Clear the terminal before every redraw
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Ring the terminal bell when the alarm fires
    #[serde(default = "default_true")]
    pub bell: bool,

    /// Stop after this many timer ticks (runs until quit when unset)
    #[serde(default)]
    pub max_ticks: Option<u64>,
}

fn default_tick_interval_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            start: AlienDateTime::default(),
            tick_interval_ms: default_tick_interval_ms(),
            time_scale: TimeScale::default(),
            clear_screen: true,
            bell: true,
            max_ticks: None,
        }
    }
}

impl ClockConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = lookup(ENV_TICK_MS) {
            self.tick_interval_ms = parse_override(ENV_TICK_MS, &value)?;
        }

        if let Some(value) = lookup(ENV_MAX_TICKS) {
            self.max_ticks = Some(parse_override(ENV_MAX_TICKS, &value)?);
        }

        Ok(self)
    }

    /// Check values that deserialize fine but cannot drive a clock
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }

        match self.time_scale {
            TimeScale::Fast(0) | TimeScale::Slow(0) => Err(ConfigError::Invalid(format!(
                "time_scale {:?} needs a non-zero factor",
                self.time_scale
            ))),
            _ => Ok(()),
        }
    }

    /// Real time between ticks, `None` when the clock only moves on request
    pub fn tick_period(&self) -> Option<Duration> {
        self.time_scale
            .tick_period(Duration::from_millis(self.tick_interval_ms))
    }
}

fn parse_override(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a whole number, got '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alien_calendar::ALIEN_EPOCH;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = ClockConfig::from_json("{}").unwrap();

        assert_eq!(config, ClockConfig::default());
        assert_eq!(config.start, ALIEN_EPOCH);
        assert_eq!(config.tick_period(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "start": { "year": 3000, "month": 2, "day": 42, "hour": 35, "minute": 89, "second": 0 },
            "tick_interval_ms": 250,
            "time_scale": { "Fast": 5 },
            "clear_screen": false,
            "bell": false,
            "max_ticks": 90
        }"#;

        let config = ClockConfig::from_json(json).unwrap();
        assert_eq!(config.start, AlienDateTime::new(3000, 2, 42, 35, 89, 0).unwrap());
        assert_eq!(config.time_scale, TimeScale::Fast(5));
        assert_eq!(config.tick_period(), Some(Duration::from_millis(50)));
        assert!(!config.clear_screen);
        assert!(!config.bell);
        assert_eq!(config.max_ticks, Some(90));
    }

    #[test]
    fn test_invalid_start_is_parse_error() {
        let json = r#"{ "start": { "year": 1, "month": 19, "day": 1, "hour": 0, "minute": 0, "second": 0 } }"#;

        match ClockConfig::from_json(json) {
            Err(ConfigError::Parse(message)) => {
                assert!(message.contains("Invalid alien date/time values"))
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = ClockConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = ClockConfig::default()
            .with_overrides(|key| match key {
                ENV_TICK_MS => Some("100".to_string()),
                ENV_MAX_TICKS => Some(" 12 ".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.max_ticks, Some(12));
    }

    #[test]
    fn test_bad_override() {
        let err = ClockConfig::default()
            .with_overrides(|key| (key == ENV_TICK_MS).then(|| "fast".to_string()))
            .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_validate() {
        assert!(ClockConfig::default().validate().is_ok());

        let zero_interval = ClockConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(zero_interval.validate().is_err());

        let frozen_fast = ClockConfig {
            time_scale: TimeScale::Fast(0),
            ..Default::default()
        };
        assert!(frozen_fast.validate().is_err());

        let fixed = ClockConfig {
            time_scale: TimeScale::Fixed,
            ..Default::default()
        };
        assert!(fixed.validate().is_ok());
        assert_eq!(fixed.tick_period(), None);
    }
}

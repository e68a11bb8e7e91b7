use std::collections::BTreeSet;

use dioxus_logger::tracing::Level;

use crate::error::{config::ConfigError, AppError};
use crate::model::reminder::ReminderThresholds;

const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_EVENT_NAME: &str = "meteor impact";
const DEFAULT_CHANNEL_NAME: &str = "meteor-impact";
const COUNTDOWN_ICON: &str = "☄️";

pub struct Config {
    pub discord_bot_token: String,
    pub command_prefix: String,
    pub log_level: Level,
    pub countdown: CountdownSettings,
}

/// Settings consumed by the countdown core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownSettings {
    /// Display label used in reminders and replies.
    pub event_name: String,
    /// Channel name used when the configure command does not supply one.
    pub default_channel_name: String,
    /// Icon prefixed to channel names and appended to reminders.
    pub icon: String,
    pub reminders: ReminderThresholds,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self {
            event_name: DEFAULT_EVENT_NAME.to_string(),
            default_channel_name: DEFAULT_CHANNEL_NAME.to_string(),
            icon: COUNTDOWN_ICON.to_string(),
            reminders: ReminderThresholds::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = CountdownSettings::default();

        let reminders = ReminderThresholds {
            days: match var("REMINDER_DAYS") {
                Some(value) => parse_thresholds("REMINDER_DAYS", &value)?,
                None => defaults.reminders.days,
            },
            hours: match var("REMINDER_HOURS") {
                Some(value) => parse_thresholds("REMINDER_HOURS", &value)?,
                None => defaults.reminders.hours,
            },
        };

        let log_level = match var("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "LOG_LEVEL".to_string(),
                    value,
                })?,
            None => Level::INFO,
        };

        Ok(Self {
            discord_bot_token: var("DISCORD_TOKEN")
                .map(|token| token.trim().to_string())
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            command_prefix: var("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            log_level,
            countdown: CountdownSettings {
                event_name: var("EVENT_NAME").unwrap_or(defaults.event_name),
                default_channel_name: var("DEFAULT_CHANNEL_NAME")
                    .unwrap_or(defaults.default_channel_name),
                icon: defaults.icon,
                reminders,
            },
        })
    }
}

/// Parses a comma separated list of positive integers such as `28,21,14,7,2,1`.
fn parse_thresholds(name: &str, value: &str) -> Result<BTreeSet<i64>, ConfigError> {
    let invalid = || ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<i64>() {
            Ok(threshold) if threshold > 0 => Ok(threshold),
            _ => Err(invalid()),
        })
        .collect()
}

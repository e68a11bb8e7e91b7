//! Parameters and results for the chat command operations.

use chrono::{DateTime, Utc};

use crate::model::event::{ChannelRef, GuildRef};

/// Parameters for configuring a new countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureEventParam {
    /// Guild the countdown channel is created in.
    pub guild: GuildRef,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// Time of day as `HH:MM`, UTC.
    pub time: String,
    /// Channel name; the configured default is used when absent.
    pub channel_name: Option<String>,
}

/// Result of a successful configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventConfigured {
    pub event_name: String,
    pub channel: ChannelRef,
    pub target_time: DateTime<Utc>,
}

impl EventConfigured {
    /// Impact time in ISO-8601 form, e.g. `2026-01-20T16:47:00+00:00`.
    pub fn iso_timestamp(&self) -> String {
        self.target_time.to_rfc3339()
    }
}

/// Result of a successful deconfiguration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDeconfigured {
    /// Name of the removed channel, when it could still be resolved.
    pub removed_channel_name: Option<String>,
}

/// Answer to the time-remaining query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeRemaining {
    /// Formatted duration until impact.
    Remaining(String),
    /// The impact time has passed.
    AlreadyOccurred { event_name: String },
}

/// Answer to the impact-timestamp query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactTime {
    pub event_name: String,
    pub target_time: DateTime<Utc>,
}

impl ImpactTime {
    /// Human readable form, e.g. `2026-01-20 16:47 (UTC)`.
    pub fn human_readable(&self) -> String {
        self.target_time.format("%Y-%m-%d %H:%M (UTC)").to_string()
    }

    pub fn iso_timestamp(&self) -> String {
        self.target_time.to_rfc3339()
    }
}

//! Domain model for the countdown event.
//!
//! At most one `Event` exists at a time. "Unconfigured" is represented by the
//! absence of an event (`Option<Event>`), which keeps the target time and channel
//! reference present or absent together.

use chrono::{DateTime, TimeDelta, Utc};
use std::collections::BTreeSet;
use std::fmt;

/// Opaque handle for a channel on the chat platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelRef(pub u64);

impl ChannelRef {
    pub fn get(self) -> u64 {
        self.0
    }

    /// Channel mention markup, e.g. `<#123>`.
    pub fn mention(self) -> String {
        format!("<#{}>", self.0)
    }
}

impl fmt::Display for ChannelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle for the guild a countdown channel is created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildRef(pub u64);

impl GuildRef {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// The active countdown.
///
/// `target_time` and `channel` are fixed for the lifetime of the value; ticks only
/// ever add markers to the fired sets. Reconfiguration builds a brand new `Event`,
/// so markers never carry over between configurations.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Impact time, always UTC.
    pub target_time: DateTime<Utc>,
    /// Channel renamed every minute and used for reminder broadcasts.
    pub channel: ChannelRef,
    /// Display label used in reminders and replies.
    pub event_name: String,
    /// Day thresholds already announced for this configuration.
    pub fired_day_markers: BTreeSet<i64>,
    /// Hour thresholds already announced for this configuration.
    pub fired_hour_markers: BTreeSet<i64>,
}

impl Event {
    pub fn new(target_time: DateTime<Utc>, channel: ChannelRef, event_name: String) -> Self {
        Self {
            target_time,
            channel,
            event_name,
            fired_day_markers: BTreeSet::new(),
            fired_hour_markers: BTreeSet::new(),
        }
    }

    /// Signed time left until impact. Negative once the impact has passed.
    pub fn remaining(&self, now: DateTime<Utc>) -> TimeDelta {
        self.target_time - now
    }

    pub fn phase(&self, now: DateTime<Utc>) -> CountdownPhase {
        if is_expired(self.remaining(now)) {
            CountdownPhase::Expired
        } else {
            CountdownPhase::Active
        }
    }

    /// Whether `other` came from the same configuration action.
    ///
    /// Every configuration creates a fresh channel, so the pair of channel and target
    /// time identifies a configuration. Fired markers are ignored.
    pub fn is_same_configuration(&self, other: &Event) -> bool {
        self.channel == other.channel && self.target_time == other.target_time
    }
}

/// True when no time is left; the impact is imminent or has happened.
pub fn is_expired(remaining: TimeDelta) -> bool {
    remaining <= TimeDelta::zero()
}

/// Observable state of the countdown state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    /// No event configured; ticks are no-ops.
    Unconfigured,
    /// Target time lies in the future; ticks rename and may remind.
    Active,
    /// Target time reached; only the imminent-name rename is ever issued.
    Expired,
}

impl CountdownPhase {
    pub fn of(event: Option<&Event>, now: DateTime<Utc>) -> Self {
        event.map_or(Self::Unconfigured, |event| event.phase(now))
    }
}

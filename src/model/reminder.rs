//! Reminder thresholds and fire decisions.

use std::collections::BTreeSet;

/// Days before impact at which everyone is pinged.
pub const DEFAULT_REMINDER_DAYS: [i64; 6] = [28, 21, 14, 7, 2, 1];

/// Hours before impact at which everyone is pinged, within the final 48 hours.
pub const DEFAULT_REMINDER_HOURS: [i64; 5] = [24, 12, 6, 3, 1];

/// Unit a reminder threshold is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    Day,
    Hour,
}

impl ReminderKind {
    pub fn unit(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// Decision to broadcast one reminder during the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderFire {
    pub kind: ReminderKind,
    pub threshold: i64,
}

impl ReminderFire {
    pub fn day(threshold: i64) -> Self {
        Self {
            kind: ReminderKind::Day,
            threshold,
        }
    }

    pub fn hour(threshold: i64) -> Self {
        Self {
            kind: ReminderKind::Hour,
            threshold,
        }
    }

    pub fn is_singular(&self) -> bool {
        self.threshold == 1
    }

    /// Threshold with its unit noun, e.g. "1 day" or "12 hours".
    pub fn quantity(&self) -> String {
        let plural = if self.is_singular() { "" } else { "s" };
        format!("{} {}{}", self.threshold, self.kind.unit(), plural)
    }
}

/// Configured day and hour thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderThresholds {
    pub days: BTreeSet<i64>,
    pub hours: BTreeSet<i64>,
}

impl Default for ReminderThresholds {
    fn default() -> Self {
        Self {
            days: DEFAULT_REMINDER_DAYS.into_iter().collect(),
            hours: DEFAULT_REMINDER_HOURS.into_iter().collect(),
        }
    }
}

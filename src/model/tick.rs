//! Plans and reports for one reconciliation tick.

use crate::model::{event::ChannelRef, reminder::ReminderFire};

/// Actions one tick has decided to perform against the platform.
///
/// Produced by the pure planning step while the event is locked. Reminder markers
/// for every entry in `reminders` have already been recorded by the time the plan
/// exists, so executing the plan is at-most-once per threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickPlan {
    pub channel: ChannelRef,
    pub event_name: String,
    /// New channel name, present only when it differs from the current one.
    pub rename: Option<String>,
    /// At most one day reminder and one hour reminder.
    pub reminders: Vec<ReminderFire>,
}

impl TickPlan {
    pub fn is_empty(&self) -> bool {
        self.rename.is_none() && self.reminders.is_empty()
    }
}

/// What a tick actually managed to do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Name applied to the channel this tick.
    pub renamed_to: Option<String>,
    /// Reminders delivered this tick.
    pub reminders_sent: Vec<ReminderFire>,
    /// Number of platform actions that failed and were logged.
    pub failed_actions: usize,
}

/// Result of one scheduled tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No event configured.
    Idle,
    /// A previous tick was still running.
    Skipped,
    /// The countdown channel could not be resolved this cycle.
    ChannelUnavailable,
    /// The event was replaced or removed while the tick was resolving the channel.
    Superseded,
    /// Planned actions were executed.
    Reconciled(TickReport),
}

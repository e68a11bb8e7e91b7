//! Channel-name reconciliation and tick planning.

use chrono::{DateTime, Utc};

use crate::{
    config::CountdownSettings,
    model::{
        event::{is_expired, Event},
        reminder::ReminderFire,
        tick::TickPlan,
    },
};

use super::{format::format_remaining, reminder::evaluate_reminders};

/// Channel name shown while the countdown is running, e.g. `☄️ · 10d 4h 32m till impact`.
pub fn countdown_channel_name(icon: &str, formatted: &str) -> String {
    format!("{} · {} till impact", icon, formatted)
}

/// Channel name shown once the impact time is reached.
pub fn imminent_channel_name(icon: &str) -> String {
    format!("{} · Impact imminent!", icon)
}

/// Broadcast text for a reminder, e.g. `@everyone **7 days** remain until **meteor impact** ☄️`.
pub fn reminder_message(fire: &ReminderFire, event_name: &str, icon: &str) -> String {
    format!(
        "@everyone **{}** remain until **{}** {}",
        fire.quantity(),
        event_name,
        icon
    )
}

/// Channel name the countdown channel should carry at `now`.
pub fn desired_channel_name(event: &Event, now: DateTime<Utc>, icon: &str) -> String {
    let remaining = event.remaining(now);

    if is_expired(remaining) {
        imminent_channel_name(icon)
    } else {
        countdown_channel_name(icon, &format_remaining(remaining))
    }
}

/// Returns the name to apply, or `None` when the channel already carries it.
pub fn rename_decision(current_name: &str, desired_name: String) -> Option<String> {
    (current_name != desired_name).then_some(desired_name)
}

/// Plans one tick for the active event.
///
/// Pure apart from recording fired reminder markers on `event`. The rename and the
/// reminder decisions are independent; either may be empty.
///
/// # Arguments
/// - `event` - The configured event; fired sets are updated in place
/// - `now` - Tick time
/// - `current_name` - Name the channel carries on the platform right now
/// - `settings` - Icon, event name and reminder thresholds
///
/// # Returns
/// - `TickPlan` - Rename and reminders to execute against the platform
pub fn plan_tick(
    event: &mut Event,
    now: DateTime<Utc>,
    current_name: &str,
    settings: &CountdownSettings,
) -> TickPlan {
    let rename = rename_decision(
        current_name,
        desired_channel_name(event, now, &settings.icon),
    );
    let reminders = evaluate_reminders(event, event.remaining(now), &settings.reminders);

    TickPlan {
        channel: event.channel,
        event_name: event.event_name.clone(),
        rename,
        reminders,
    }
}

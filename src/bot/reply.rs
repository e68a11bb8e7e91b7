//! Chat replies for command results.

use crate::{
    bot::command::CREATE_COMMAND,
    error::command::CommandError,
    model::command::{EventConfigured, EventDeconfigured, ImpactTime, TimeRemaining},
};

pub fn configured(result: &EventConfigured) -> String {
    format!(
        "✅ Created meteor event for **{}**.\n   • Channel: {}\n   • Impact time (UTC): **{}**\n   • Countdown and reminders are now active.",
        result.event_name,
        result.channel.mention(),
        result.iso_timestamp()
    )
}

pub fn deconfigured(result: &EventDeconfigured) -> String {
    match &result.removed_channel_name {
        Some(name) => format!("🗑️ Deleted meteor event. Removed channel **#{}**.", name),
        None => "🗑️ Deleted meteor event.".to_string(),
    }
}

pub fn time_remaining(result: &TimeRemaining, icon: &str) -> String {
    match result {
        TimeRemaining::Remaining(formatted) => {
            format!("{} Time until impact: **{}**", icon, formatted)
        }
        TimeRemaining::AlreadyOccurred { event_name } => {
            format!("The **{}** has already occurred!", event_name)
        }
    }
}

pub fn impact_time(result: &ImpactTime, icon: &str) -> String {
    format!(
        "{} Impact date & time for **{}**:\n   • {}\n   • ISO: `{}`",
        icon,
        result.event_name,
        result.human_readable(),
        result.iso_timestamp()
    )
}

/// Renders a command error for the member who issued the command.
pub fn error(err: &CommandError, prefix: &str) -> String {
    match err {
        CommandError::InvalidInput { .. } => format!(
            "❌ Invalid format.\nUse: `{p}{c} YYYY-MM-DD HH:MM [channel-name]`\nExample: `{p}{c} 2026-01-20 16:47 meteor-impact`",
            p = prefix,
            c = CREATE_COMMAND
        ),
        CommandError::NoActiveEvent => format!(
            "There is no active meteor event. Use `{}{}` first.",
            prefix, CREATE_COMMAND
        ),
        CommandError::MissingPermission(permission) => {
            format!("❌ You need the **{}** permission to do that.", permission)
        }
        CommandError::ChannelCreation(_) => {
            "❌ Could not create the countdown channel. Check the bot's permissions and try again."
                .to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::ChannelRef;
    use chrono::{TimeZone, Utc};

    #[test]
    fn renders_configured_reply() {
        let reply = configured(
            &EventConfigured {
                event_name: "meteor impact".to_string(),
                channel: ChannelRef(55),
                target_time: Utc.with_ymd_and_hms(2026, 1, 20, 16, 47, 0).unwrap(),
            },
        );

        assert!(reply.contains("<#55>"));
        assert!(reply.contains("**2026-01-20T16:47:00+00:00**"));
    }

    #[test]
    fn renders_deconfigured_reply() {
        assert_eq!(
            deconfigured(&EventDeconfigured {
                removed_channel_name: Some("meteor-impact".to_string())
            }),
            "🗑️ Deleted meteor event. Removed channel **#meteor-impact**."
        );
        assert_eq!(
            deconfigured(&EventDeconfigured {
                removed_channel_name: None
            }),
            "🗑️ Deleted meteor event."
        );
    }

    #[test]
    fn renders_no_active_event_hint() {
        assert_eq!(
            error(&CommandError::NoActiveEvent, "!"),
            "There is no active meteor event. Use `!createmeteor` first."
        );
    }

    #[test]
    fn renders_usage_hint_with_prefix() {
        let reply = error(&CommandError::invalid_input("x", "bad"), "?");

        assert!(reply.contains("`?createmeteor YYYY-MM-DD HH:MM [channel-name]`"));
    }
}

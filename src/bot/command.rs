//! Prefix command parsing.
//!
//! Commands are plain guild messages such as `!createmeteor 2026-01-20 16:47`. Only
//! the first word selects the command; for `createmeteor` every word after the date
//! and time forms the channel name.

use crate::error::command::CommandError;

pub const CREATE_COMMAND: &str = "createmeteor";
pub const DELETE_COMMAND: &str = "deletemeteor";
pub const TIME_LEFT_COMMAND: &str = "timeleft";
pub const IMPACT_COMMAND: &str = "impact";

/// Chat command recognised by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Configure a countdown: date, time and optional channel name.
    Create {
        date: String,
        time: String,
        channel_name: Option<String>,
    },
    /// Remove the countdown and its channel.
    Delete,
    /// Show the time left until impact.
    TimeLeft,
    /// Show the impact date and time.
    Impact,
}

impl BotCommand {
    /// Parses a message into a command.
    ///
    /// # Arguments
    /// - `content` - Raw message content
    /// - `prefix` - Command prefix, e.g. `!`
    ///
    /// # Returns
    /// - `None` - The message is not addressed to the bot
    /// - `Some(Ok(BotCommand))` - A recognised command
    /// - `Some(Err(CommandError::InvalidInput))` - `createmeteor` without date and time
    pub fn parse(content: &str, prefix: &str) -> Option<Result<Self, CommandError>> {
        let body = content.trim().strip_prefix(prefix)?;
        if body.starts_with(char::is_whitespace) {
            return None;
        }
        let mut words = body.split_whitespace();
        let name = words.next()?;

        let command = match name {
            CREATE_COMMAND => {
                let (Some(date), Some(time)) = (words.next(), words.next()) else {
                    return Some(Err(CommandError::invalid_input(
                        body.trim(),
                        "date and time are required",
                    )));
                };
                let rest: Vec<&str> = words.collect();

                Self::Create {
                    date: date.to_string(),
                    time: time.to_string(),
                    channel_name: (!rest.is_empty()).then(|| rest.join(" ")),
                }
            }
            DELETE_COMMAND => Self::Delete,
            TIME_LEFT_COMMAND => Self::TimeLeft,
            IMPACT_COMMAND => Self::Impact,
            _ => return None,
        };

        Some(Ok(command))
    }

    /// Whether the command changes guild channels and needs Manage Channels.
    pub fn requires_manage_channels(&self) -> bool {
        matches!(self, Self::Create { .. } | Self::Delete)
    }
}

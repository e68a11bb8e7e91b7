use thiserror::Error;

use crate::error::platform::PlatformError;

/// Errors surfaced to the member who issued a chat command.
///
/// None of these are faults of the bot itself. They are rendered as replies in the
/// channel the command was issued from (see `bot::reply`).
#[derive(Error, Debug)]
pub enum CommandError {
    /// Date or time supplied to the configure command could not be parsed.
    ///
    /// Raised before any state is touched, so an existing event is left exactly as
    /// it was.
    #[error("Invalid impact time '{input}': {reason}")]
    InvalidInput {
        /// The raw input that was rejected
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// A query or deconfiguration was issued while no event is configured.
    #[error("There is no active event")]
    NoActiveEvent,

    /// The author lacks the guild permission the command requires.
    #[error("Missing required permission: {0}")]
    MissingPermission(&'static str),

    /// The new countdown channel could not be created.
    ///
    /// The prior event (if any) has already been torn down when this is returned.
    #[error("Failed to create countdown channel: {0}")]
    ChannelCreation(#[source] PlatformError),
}

impl CommandError {
    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

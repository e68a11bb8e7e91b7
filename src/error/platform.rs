use std::fmt;

use thiserror::Error;

use crate::model::event::ChannelRef;

/// Side-effecting action requested from the chat platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformAction {
    CreateChannel,
    RenameChannel,
    DeleteChannel,
    SendMessage,
}

impl fmt::Display for PlatformAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CreateChannel => "create channel",
            Self::RenameChannel => "rename channel",
            Self::DeleteChannel => "delete channel",
            Self::SendMessage => "send message",
        };
        f.write_str(label)
    }
}

/// Failures reported by the chat platform collaborator.
///
/// These never propagate out of a tick. Each one is logged at the action that
/// produced it and the remaining actions of the tick still run.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The platform rejected or timed out a create, rename, delete or send action.
    #[error("Failed to {action}: {reason}")]
    ExternalActionFailure {
        /// The action that was attempted
        action: PlatformAction,
        /// Reason reported by the platform client
        reason: String,
    },

    /// The configured channel reference no longer resolves to a guild channel.
    ///
    /// Usually means the channel was deleted outside of the bot. The event state is
    /// not cleared; the tick simply skips its actions for that cycle.
    #[error("Channel {channel} could not be resolved: {reason}")]
    ChannelLookupFailure {
        /// The channel that failed to resolve
        channel: ChannelRef,
        /// Reason reported by the platform client
        reason: String,
    },
}

impl PlatformError {
    pub fn action(action: PlatformAction, reason: impl ToString) -> Self {
        Self::ExternalActionFailure {
            action,
            reason: reason.to_string(),
        }
    }

    pub fn lookup(channel: ChannelRef, reason: impl ToString) -> Self {
        Self::ChannelLookupFailure {
            channel,
            reason: reason.to_string(),
        }
    }
}

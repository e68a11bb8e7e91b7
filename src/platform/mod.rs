//! Chat platform collaborator.
//!
//! The countdown core never talks to Discord directly. It asks a `ChannelPlatform`
//! to create, inspect, rename and delete channels and to send messages, and treats
//! every call as a best-effort single attempt whose failure is reported as a
//! `PlatformError`.

pub mod discord;

use serenity::async_trait;

use crate::{
    error::platform::PlatformError,
    model::event::{ChannelRef, GuildRef},
};

pub use discord::DiscordPlatform;

#[async_trait]
pub trait ChannelPlatform: Send + Sync + 'static {
    /// Creates a text channel named `name` in `guild`.
    async fn create_channel(&self, guild: GuildRef, name: &str)
        -> Result<ChannelRef, PlatformError>;

    /// Resolves the current display name of `channel`.
    ///
    /// Fails with `PlatformError::ChannelLookupFailure` when the channel no longer exists.
    async fn channel_name(&self, channel: ChannelRef) -> Result<String, PlatformError>;

    async fn rename_channel(&self, channel: ChannelRef, name: &str) -> Result<(), PlatformError>;

    /// Deletes `channel`, recording `reason` in the audit log where supported.
    async fn delete_channel(&self, channel: ChannelRef, reason: &str)
        -> Result<(), PlatformError>;

    async fn send_message(&self, channel: ChannelRef, text: &str) -> Result<(), PlatformError>;
}

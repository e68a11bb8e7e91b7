//! Serenity-backed implementation of the chat platform collaborator.

use serenity::all::{ChannelId, ChannelType, CreateChannel, EditChannel, GuildId};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    error::platform::{PlatformAction, PlatformError},
    model::event::{ChannelRef, GuildRef},
};

use super::ChannelPlatform;

/// Discord channel and message operations over the bot's HTTP client.
#[derive(Clone)]
pub struct DiscordPlatform {
    http: Arc<Http>,
}

impl DiscordPlatform {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChannelPlatform for DiscordPlatform {
    async fn create_channel(
        &self,
        guild: GuildRef,
        name: &str,
    ) -> Result<ChannelRef, PlatformError> {
        let builder = CreateChannel::new(name).kind(ChannelType::Text);

        let channel = GuildId::new(guild.get())
            .create_channel(&self.http, builder)
            .await
            .map_err(|e| PlatformError::action(PlatformAction::CreateChannel, e))?;

        Ok(ChannelRef(channel.id.get()))
    }

    async fn channel_name(&self, channel: ChannelRef) -> Result<String, PlatformError> {
        let resolved = self
            .http
            .get_channel(ChannelId::new(channel.get()))
            .await
            .map_err(|e| PlatformError::lookup(channel, e))?;

        resolved
            .guild()
            .map(|guild_channel| guild_channel.name)
            .ok_or_else(|| PlatformError::lookup(channel, "not a guild channel"))
    }

    async fn rename_channel(&self, channel: ChannelRef, name: &str) -> Result<(), PlatformError> {
        ChannelId::new(channel.get())
            .edit(&self.http, EditChannel::new().name(name))
            .await
            .map_err(|e| PlatformError::action(PlatformAction::RenameChannel, e))?;

        Ok(())
    }

    async fn delete_channel(&self, channel: ChannelRef, reason: &str) -> Result<(), PlatformError> {
        self.http
            .delete_channel(ChannelId::new(channel.get()), Some(reason))
            .await
            .map_err(|e| PlatformError::action(PlatformAction::DeleteChannel, e))?;

        Ok(())
    }

    async fn send_message(&self, channel: ChannelRef, text: &str) -> Result<(), PlatformError> {
        ChannelId::new(channel.get())
            .say(&self.http, text)
            .await
            .map_err(|e| PlatformError::action(PlatformAction::SendMessage, e))?;

        Ok(())
    }
}

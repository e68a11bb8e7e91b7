//! Message handler dispatching prefix commands.

use chrono::Utc;
use dioxus_logger::tracing;
use serenity::all::{Context, Message};

use crate::{
    bot::{command::BotCommand, reply},
    error::command::CommandError,
    model::{command::ConfigureEventParam, event::GuildRef},
};

use super::Handler;

const MANAGE_CHANNELS: &str = "Manage Channels";

/// Handle message creation in a channel
pub async fn handle_message(handler: &Handler, ctx: Context, message: Message) {
    // Only guild channels, and never other bots
    if message.author.bot {
        return;
    }
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let Some(parsed) = BotCommand::parse(&message.content, &handler.command_prefix) else {
        return;
    };

    tracing::debug!(
        "Command from {} in guild {}: {}",
        message.author.name,
        guild_id,
        message.content
    );

    let response = match parsed {
        Ok(command) => execute(handler, &ctx, &message, GuildRef(guild_id.get()), command).await,
        Err(e) => Err(e),
    };

    let text = match response {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("Command rejected: {}", e);
            reply::error(&e, &handler.command_prefix)
        }
    };

    if let Err(e) = message.channel_id.say(&ctx.http, text).await {
        tracing::error!("Failed to reply in channel {}: {}", message.channel_id, e);
    }
}

/// Runs a parsed command and renders its reply.
async fn execute(
    handler: &Handler,
    ctx: &Context,
    message: &Message,
    guild: GuildRef,
    command: BotCommand,
) -> Result<String, CommandError> {
    if command.requires_manage_channels() && !can_manage_channels(ctx, message) {
        return Err(CommandError::MissingPermission(MANAGE_CHANNELS));
    }

    let service = handler.countdown_service(ctx);
    let icon = &handler.settings.icon;

    match command {
        BotCommand::Create {
            date,
            time,
            channel_name,
        } => {
            let configured = service
                .configure(ConfigureEventParam {
                    guild,
                    date,
                    time,
                    channel_name,
                })
                .await?;
            Ok(reply::configured(&configured))
        }
        BotCommand::Delete => {
            let deconfigured = service.deconfigure().await?;
            Ok(reply::deconfigured(&deconfigured))
        }
        BotCommand::TimeLeft => {
            let remaining = service.time_remaining(Utc::now()).await?;
            Ok(reply::time_remaining(&remaining, icon))
        }
        BotCommand::Impact => {
            let impact = service.impact_time().await?;
            Ok(reply::impact_time(&impact, icon))
        }
    }
}

/// Checks the author's Manage Channels permission from the guild cache.
fn can_manage_channels(ctx: &Context, message: &Message) -> bool {
    message
        .author_permissions(&ctx.cache)
        .is_some_and(|permissions| permissions.manage_channels())
}

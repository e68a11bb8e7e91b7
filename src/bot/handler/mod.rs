use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tokio_cron_scheduler::JobScheduler;

use crate::{
    config::CountdownSettings,
    platform::DiscordPlatform,
    service::{countdown::CountdownService, event_store::EventStore},
};

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// Event state shared by commands and the scheduler
    pub store: EventStore,
    pub settings: Arc<CountdownSettings>,
    pub command_prefix: String,
    /// Countdown scheduler, started on the first ready event
    pub scheduler: OnceCell<JobScheduler>,
}

impl Handler {
    pub fn new(settings: CountdownSettings, command_prefix: String) -> Self {
        Self {
            store: EventStore::new(),
            settings: Arc::new(settings),
            command_prefix,
            scheduler: OnceCell::new(),
        }
    }

    /// Builds a countdown service backed by the context's HTTP client.
    pub fn countdown_service(&self, ctx: &Context) -> CountdownService<DiscordPlatform> {
        CountdownService::new(
            self.store.clone(),
            DiscordPlatform::new(ctx.http.clone()),
            self.settings.clone(),
        )
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self, ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }
}

//! Ready event handler for bot initialization.
//!
//! The ready event fires after every successful gateway handshake, including
//! reconnects. The countdown scheduler is started on the first one only, followed
//! by an immediate tick so the channel name is correct without waiting for the next
//! full minute.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

use crate::scheduler::countdown::{process_tick, start_scheduler};

use super::Handler;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `handler` - Bot handler holding the event store and scheduler slot
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(handler: &Handler, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if handler.scheduler.initialized() {
        tracing::debug!("Countdown scheduler already running");
        return;
    }

    let service = handler.countdown_service(&ctx);

    if let Err(e) = handler
        .scheduler
        .get_or_try_init(|| start_scheduler(service.clone()))
        .await
    {
        tracing::error!("Failed to start countdown scheduler: {}", e);
        return;
    }

    process_tick(&service).await;
}

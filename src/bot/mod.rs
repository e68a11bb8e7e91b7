//! Discord bot integration for the countdown.
//!
//! This module wires the countdown service to Discord. The bot listens for prefix
//! commands in guild messages, replies in the channel the command came from and
//! starts the once-per-minute countdown scheduler after it first connects.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data for permission checks
//! - `GUILD_MESSAGES` - Receive messages in guild channels
//! - `MESSAGE_CONTENT` - Read command text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod reply;
pub mod start;

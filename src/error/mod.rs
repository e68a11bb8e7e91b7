//! Error types for the countdown bot.
//!
//! `AppError` is the top-level error returned from startup. It only covers the
//! conditions that abort the process: bad configuration, a failed gateway client or
//! a scheduler that cannot be started. Everything that happens once the bot is
//! running is handled closer to the source:
//!
//! - `CommandError` is rendered as a chat reply to the member who issued the command
//! - `PlatformError` is logged where the external action failed and never escapes a tick

pub mod command;
pub mod config;
pub mod platform;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

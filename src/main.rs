mod bot;
mod config;
mod error;
mod model;
mod platform;
mod scheduler;
mod service;
mod util;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    tracing::info!(
        "Starting countdown bot for {} (prefix '{}')",
        config.countdown.event_name,
        config.command_prefix
    );

    let client = bot::start::init_bot(&config).await?;
    bot::start::start_bot(client).await
}

use chrono::Utc;
use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    model::tick::TickOutcome,
    platform::ChannelPlatform,
    service::countdown::CountdownService,
};

/// Every minute, on the minute.
const TICK_SCHEDULE: &str = "0 * * * * *";

/// Starts the countdown scheduler
///
/// This scheduler runs every minute and reconciles the countdown:
/// - Renames the countdown channel to show the remaining time
/// - Posts day and hour reminders as thresholds are reached
///
/// The returned scheduler must be kept alive for as long as ticks should run.
///
/// # Arguments
/// - `service`: Countdown service the ticks run against
pub async fn start_scheduler<P: ChannelPlatform + Clone>(
    service: CountdownService<P>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_service = service.clone();

    let job = Job::new_async(TICK_SCHEDULE, move |_uuid, _lock| {
        let service = job_service.clone();

        Box::pin(async move {
            process_tick(&service).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Countdown scheduler started");

    Ok(scheduler)
}

/// Runs one tick at the current time and logs its outcome
pub async fn process_tick<P: ChannelPlatform>(service: &CountdownService<P>) -> TickOutcome {
    let outcome = service.run_tick(Utc::now()).await;

    match &outcome {
        TickOutcome::Reconciled(report) if report.failed_actions > 0 => {
            tracing::warn!(
                "Countdown tick finished with {} failed action(s)",
                report.failed_actions
            );
        }
        other => tracing::debug!("Countdown tick outcome: {:?}", other),
    }

    outcome
}

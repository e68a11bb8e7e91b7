//! Execution of one reconciliation tick.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::{
    model::{
        event::CountdownPhase,
        tick::{TickOutcome, TickPlan, TickReport},
    },
    platform::ChannelPlatform,
};

use super::{reconcile::plan_tick, reconcile::reminder_message, CountdownService};

impl<P: ChannelPlatform> CountdownService<P> {
    /// Runs one reconciliation tick.
    ///
    /// Steps:
    /// 1. Skip if another tick still holds the tick guard
    /// 2. Snapshot the event; no event means nothing to do
    /// 3. Resolve the channel's current name; on failure skip this cycle without
    ///    touching the event
    /// 4. Re-lock the event and plan against it, unless it was replaced meanwhile.
    ///    Planning records fired reminder markers before anything is sent
    /// 5. Execute the rename and each reminder independently
    ///
    /// # Arguments
    /// - `now` - Tick time
    ///
    /// # Returns
    /// - `TickOutcome` - What the tick did; failures are logged, never returned
    pub async fn run_tick(&self, now: DateTime<Utc>) -> TickOutcome {
        let Some(_tick) = self.store.try_begin_tick() else {
            tracing::warn!("Previous countdown tick still running, skipping");
            return TickOutcome::Skipped;
        };

        let snapshot = self.store.snapshot().await;
        let phase = CountdownPhase::of(snapshot.as_ref(), now);
        let Some(snapshot) = snapshot else {
            return TickOutcome::Idle;
        };
        tracing::debug!("Countdown tick at {} ({:?})", now.to_rfc3339(), phase);

        let current_name = match self.platform.channel_name(snapshot.channel).await {
            Ok(name) => name,
            Err(e) => {
                tracing::error!("Could not fetch countdown channel: {}", e);
                return TickOutcome::ChannelUnavailable;
            }
        };

        let plan = {
            let mut state = self.store.write().await;
            match state.as_mut() {
                Some(event) if event.is_same_configuration(&snapshot) => {
                    plan_tick(event, now, &current_name, &self.settings)
                }
                _ => {
                    tracing::debug!("Countdown event changed during tick, skipping");
                    return TickOutcome::Superseded;
                }
            }
        };

        TickOutcome::Reconciled(self.execute_plan(plan).await)
    }

    /// Performs the planned actions, isolating each failure.
    async fn execute_plan(&self, plan: TickPlan) -> TickReport {
        let mut report = TickReport::default();
        if plan.is_empty() {
            return report;
        }

        if let Some(name) = plan.rename {
            match self.platform.rename_channel(plan.channel, &name).await {
                Ok(()) => {
                    tracing::info!("Updated channel name to: {}", name);
                    report.renamed_to = Some(name);
                }
                Err(e) => {
                    tracing::error!("Rename of channel {} failed: {}", plan.channel, e);
                    report.failed_actions += 1;
                }
            }
        }

        for fire in plan.reminders {
            let text = reminder_message(&fire, &plan.event_name, &self.settings.icon);

            match self.platform.send_message(plan.channel, &text).await {
                Ok(()) => {
                    tracing::info!(
                        "Sent {} reminder to channel {}",
                        fire.quantity(),
                        plan.channel
                    );
                    report.reminders_sent.push(fire);
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to send {} reminder to channel {}: {}",
                        fire.quantity(),
                        plan.channel,
                        e
                    );
                    report.failed_actions += 1;
                }
            }
        }

        report
    }
}

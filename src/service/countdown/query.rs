//! Read-only queries about the configured countdown.

use chrono::{DateTime, Utc};

use crate::{
    error::command::CommandError,
    model::{
        command::{ImpactTime, TimeRemaining},
        event::is_expired,
    },
    platform::ChannelPlatform,
};

use super::{format::format_remaining, CountdownService};

impl<P: ChannelPlatform> CountdownService<P> {
    /// Reports the time left until impact.
    ///
    /// # Returns
    /// - `Ok(TimeRemaining::Remaining)` - Formatted duration, e.g. `3d 2h 10m`
    /// - `Ok(TimeRemaining::AlreadyOccurred)` - The impact time has passed
    /// - `Err(CommandError::NoActiveEvent)` - Nothing is configured
    pub async fn time_remaining(&self, now: DateTime<Utc>) -> Result<TimeRemaining, CommandError> {
        let state = self.store.read().await;
        let event = state.as_ref().ok_or(CommandError::NoActiveEvent)?;
        let remaining = event.remaining(now);

        if is_expired(remaining) {
            Ok(TimeRemaining::AlreadyOccurred {
                event_name: event.event_name.clone(),
            })
        } else {
            Ok(TimeRemaining::Remaining(format_remaining(remaining)))
        }
    }

    /// Reports the configured impact time.
    ///
    /// # Returns
    /// - `Ok(ImpactTime)` - Impact time, renderable as human readable or ISO-8601
    /// - `Err(CommandError::NoActiveEvent)` - Nothing is configured
    pub async fn impact_time(&self) -> Result<ImpactTime, CommandError> {
        let state = self.store.read().await;
        let event = state.as_ref().ok_or(CommandError::NoActiveEvent)?;

        Ok(ImpactTime {
            event_name: event.event_name.clone(),
            target_time: event.target_time,
        })
    }
}

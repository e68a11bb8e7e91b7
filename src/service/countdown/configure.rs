//! Configure and deconfigure operations.

use dioxus_logger::tracing;

use crate::{
    error::command::CommandError,
    model::{
        command::{ConfigureEventParam, EventConfigured, EventDeconfigured},
        event::Event,
    },
    platform::ChannelPlatform,
    util::parse::parse_impact_time,
};

use super::CountdownService;

const RECREATE_REASON: &str = "Recreating meteor countdown channel";
const DELETE_REASON: &str = "Meteor event deleted";

impl<P: ChannelPlatform> CountdownService<P> {
    /// Configures a new countdown, replacing any existing one.
    ///
    /// Parses the impact time first; malformed input is rejected before the event is
    /// touched. Otherwise the previous countdown channel is deleted (best-effort), a
    /// new channel is created and a fresh event with empty fired sets is stored. The
    /// event lock is held for the whole transition so a tick never sees the new
    /// target time paired with the old channel or markers.
    ///
    /// # Arguments
    /// - `param` - Guild, date, time and optional channel name
    ///
    /// # Returns
    /// - `Ok(EventConfigured)` - The new channel and UTC impact time
    /// - `Err(CommandError::InvalidInput)` - Date or time could not be parsed; no
    ///   state was changed
    /// - `Err(CommandError::ChannelCreation)` - The new channel could not be created;
    ///   the previous event has been cleared since its channel is already gone
    pub async fn configure(
        &self,
        param: ConfigureEventParam,
    ) -> Result<EventConfigured, CommandError> {
        let target_time = parse_impact_time(&param.date, &param.time)?;
        let channel_name = param
            .channel_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.settings.default_channel_name.clone());

        let mut state = self.store.write().await;

        if let Some(previous) = state.take() {
            if let Err(e) = self
                .platform
                .delete_channel(previous.channel, RECREATE_REASON)
                .await
            {
                tracing::error!(
                    "Failed to delete old countdown channel {}: {}",
                    previous.channel,
                    e
                );
            }
        }

        let channel = self
            .platform
            .create_channel(param.guild, &channel_name)
            .await
            .map_err(CommandError::ChannelCreation)?;

        let event = Event::new(target_time, channel, self.settings.event_name.clone());
        *state = Some(event);

        tracing::info!(
            "Configured {} for {} in channel {}",
            self.settings.event_name,
            target_time.to_rfc3339(),
            channel
        );

        Ok(EventConfigured {
            event_name: self.settings.event_name.clone(),
            channel,
            target_time,
        })
    }

    /// Removes the configured countdown and deletes its channel (best-effort).
    ///
    /// The delete is attempted even when the channel name cannot be resolved.
    ///
    /// # Returns
    /// - `Ok(EventDeconfigured)` - State cleared; carries the channel's name when it
    ///   could still be resolved
    /// - `Err(CommandError::NoActiveEvent)` - Nothing was configured
    pub async fn deconfigure(&self) -> Result<EventDeconfigured, CommandError> {
        let mut state = self.store.write().await;
        let event = state.take().ok_or(CommandError::NoActiveEvent)?;

        let removed_channel_name = match self.platform.channel_name(event.channel).await {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::warn!("Could not resolve countdown channel name: {}", e);
                None
            }
        };

        if let Err(e) = self
            .platform
            .delete_channel(event.channel, DELETE_REASON)
            .await
        {
            tracing::error!("Failed to delete countdown channel {}: {}", event.channel, e);
        }

        tracing::info!("Deconfigured {}", event.event_name);

        Ok(EventDeconfigured {
            removed_channel_name,
        })
    }
}

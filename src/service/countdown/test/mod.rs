use super::*;
use crate::{
    error::{
        command::CommandError,
        platform::{PlatformAction, PlatformError},
    },
    model::{
        command::ConfigureEventParam,
        event::{ChannelRef, GuildRef},
        reminder::ReminderFire,
        tick::TickOutcome,
    },
};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serenity::async_trait;
use std::collections::HashMap;
use std::sync::Mutex as StdMutex;

mod query;

const GUILD: GuildRef = GuildRef(100);

/// Impact time used by most tests: 2026-01-20 16:47 UTC.
fn impact() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 20, 16, 47, 0).unwrap()
}

fn configure_param(date: &str, time: &str, channel_name: Option<&str>) -> ConfigureEventParam {
    ConfigureEventParam {
        guild: GUILD,
        date: date.to_string(),
        time: time.to_string(),
        channel_name: channel_name.map(str::to_string),
    }
}

#[derive(Default)]
struct PlatformState {
    next_id: u64,
    channels: HashMap<u64, String>,
    created: Vec<(GuildRef, String)>,
    renamed: Vec<(ChannelRef, String)>,
    deleted: Vec<(ChannelRef, String)>,
    sent: Vec<(ChannelRef, String)>,
    fail_create: bool,
    fail_lookup: bool,
    fail_rename: bool,
    fail_delete: bool,
    fail_send: bool,
}

/// In-memory chat platform that records every action and can be told to fail.
#[derive(Clone, Default)]
struct RecordingPlatform {
    state: Arc<StdMutex<PlatformState>>,
}

impl RecordingPlatform {
    fn with<T>(&self, f: impl FnOnce(&mut PlatformState) -> T) -> T {
        f(&mut self.state.lock().unwrap())
    }

    fn channel_exists(&self, channel: ChannelRef) -> bool {
        self.with(|s| s.channels.contains_key(&channel.get()))
    }

    fn current_name(&self, channel: ChannelRef) -> Option<String> {
        self.with(|s| s.channels.get(&channel.get()).cloned())
    }

    /// Removes a channel behind the bot's back.
    fn remove_externally(&self, channel: ChannelRef) {
        self.with(|s| s.channels.remove(&channel.get()));
    }

    fn sent(&self) -> Vec<(ChannelRef, String)> {
        self.with(|s| s.sent.clone())
    }

    fn renamed(&self) -> Vec<(ChannelRef, String)> {
        self.with(|s| s.renamed.clone())
    }

    fn deleted(&self) -> Vec<(ChannelRef, String)> {
        self.with(|s| s.deleted.clone())
    }

    fn created(&self) -> Vec<(GuildRef, String)> {
        self.with(|s| s.created.clone())
    }
}

#[async_trait]
impl ChannelPlatform for RecordingPlatform {
    async fn create_channel(
        &self,
        guild: GuildRef,
        name: &str,
    ) -> Result<ChannelRef, PlatformError> {
        self.with(|s| {
            if s.fail_create {
                return Err(PlatformError::action(PlatformAction::CreateChannel, "denied"));
            }
            s.next_id += 1;
            let id = 1_000 + s.next_id;
            s.channels.insert(id, name.to_string());
            s.created.push((guild, name.to_string()));
            Ok(ChannelRef(id))
        })
    }

    async fn channel_name(&self, channel: ChannelRef) -> Result<String, PlatformError> {
        if self.with(|s| s.fail_lookup) {
            return Err(PlatformError::lookup(channel, "429 Too Many Requests"));
        }
        self.current_name(channel)
            .ok_or_else(|| PlatformError::lookup(channel, "Unknown Channel"))
    }

    async fn rename_channel(&self, channel: ChannelRef, name: &str) -> Result<(), PlatformError> {
        self.with(|s| {
            if s.fail_rename {
                return Err(PlatformError::action(PlatformAction::RenameChannel, "rate limited"));
            }
            s.channels.insert(channel.get(), name.to_string());
            s.renamed.push((channel, name.to_string()));
            Ok(())
        })
    }

    async fn delete_channel(&self, channel: ChannelRef, reason: &str) -> Result<(), PlatformError> {
        self.with(|s| {
            if s.fail_delete {
                return Err(PlatformError::action(PlatformAction::DeleteChannel, "denied"));
            }
            s.channels.remove(&channel.get());
            s.deleted.push((channel, reason.to_string()));
            Ok(())
        })
    }

    async fn send_message(&self, channel: ChannelRef, text: &str) -> Result<(), PlatformError> {
        self.with(|s| {
            if s.fail_send {
                return Err(PlatformError::action(PlatformAction::SendMessage, "missing access"));
            }
            s.sent.push((channel, text.to_string()));
            Ok(())
        })
    }
}

fn service() -> (CountdownService<RecordingPlatform>, RecordingPlatform) {
    let platform = RecordingPlatform::default();
    let service = CountdownService::new(
        EventStore::new(),
        platform.clone(),
        Arc::new(CountdownSettings::default()),
    );
    (service, platform)
}

/// Creates a service with an event configured for `impact()` in a fresh channel.
async fn configured_service() -> (
    CountdownService<RecordingPlatform>,
    RecordingPlatform,
    ChannelRef,
) {
    let (service, platform) = service();
    let configured = service
        .configure(configure_param("2026-01-20", "16:47", None))
        .await
        .unwrap();
    (service, platform, configured.channel)
}

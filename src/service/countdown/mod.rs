//! Countdown service.
//!
//! Owns the event state and the chat platform collaborator, and exposes the four
//! command operations together with the periodic tick. The pure decision logic lives
//! in the submodules:
//!
//! - `format` - Time-remaining formatter
//! - `reminder` - Day/hour reminder threshold evaluation
//! - `reconcile` - Channel-name reconciliation and tick planning
//!
//! The operations themselves are split by concern:
//!
//! - `configure` - Configure and deconfigure commands
//! - `query` - Time-remaining and impact-time queries
//! - `tick` - Execution of one reconciliation tick

pub mod configure;
pub mod format;
pub mod query;
pub mod reconcile;
pub mod reminder;
pub mod tick;

#[cfg(test)]
mod test;

use std::sync::Arc;

use crate::{
    config::CountdownSettings, platform::ChannelPlatform, service::event_store::EventStore,
};

/// Service providing the countdown operations.
///
/// Cheap to clone: the store and settings are reference counted and the platform is
/// expected to be a thin handle (e.g. around `Arc<Http>`). Every service built on the
/// same `EventStore` sees the same event.
#[derive(Clone)]
pub struct CountdownService<P: ChannelPlatform> {
    /// Single owner of the event state
    store: EventStore,
    /// Chat platform used for channel and message actions
    platform: P,
    /// Event name, icon and reminder thresholds
    settings: Arc<CountdownSettings>,
}

impl<P: ChannelPlatform> CountdownService<P> {
    /// Creates a new CountdownService instance.
    ///
    /// # Arguments
    /// - `store` - Event store shared with every other handle on the same countdown
    /// - `platform` - Chat platform collaborator
    /// - `settings` - Countdown settings from configuration
    ///
    /// # Returns
    /// - `CountdownService` - New service instance
    pub fn new(store: EventStore, platform: P, settings: Arc<CountdownSettings>) -> Self {
        Self {
            store,
            platform,
            settings,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &EventStore {
        &self.store
    }
}

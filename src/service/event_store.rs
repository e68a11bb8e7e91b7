use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::event::Event;

/// Single owner of the countdown event.
///
/// The event lives in memory only and is lost on restart. Commands replace or clear
/// it while holding the write lock, and ticks record reminder markers under the same
/// lock, so a tick always observes either the complete old event or the complete new
/// one.
///
/// A separate tick guard keeps ticks from overlapping when a previous tick is still
/// waiting on the platform.
#[derive(Clone, Default)]
pub struct EventStore {
    event: Arc<RwLock<Option<Event>>>,
    tick_guard: Arc<Mutex<()>>,
}

impl EventStore {
    /// Creates an empty store with no configured event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the configured event, if any.
    pub async fn snapshot(&self) -> Option<Event> {
        self.event.read().await.clone()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Option<Event>> {
        self.event.read().await
    }

    /// Locks the event for a state transition.
    ///
    /// The guard may be held across platform calls; other commands and ticks wait
    /// until the transition completes.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Option<Event>> {
        self.event.write().await
    }

    /// Claims the tick guard.
    ///
    /// # Returns
    /// - `Some(guard)` - No other tick is running; hold the guard for the whole tick
    /// - `None` - A previous tick is still in progress
    pub fn try_begin_tick(&self) -> Option<MutexGuard<'_, ()>> {
        self.tick_guard.try_lock().ok()
    }
}

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::raid_event::RaidEventRepository,
    error::AppError,
    service::{host::GuildHost, signup::EventLocks},
    util::time::parse_event_time,
};

pub struct LifecycleService<'a, H: GuildHost> {
    db: &'a DatabaseConnection,
    host: &'a H,
    locks: &'a EventLocks,
}

impl<'a, H: GuildHost> LifecycleService<'a, H> {
    pub fn new(db: &'a DatabaseConnection, host: &'a H, locks: &'a EventLocks) -> Self {
        Self { db, host, locks }
    }

    /// Closes sign-ups for every event whose start time has passed
    ///
    /// For each event not yet marked started across all guilds: locks the discussion
    /// thread, strips the sign-up controls from the announcement and marks the event
    /// started. Host failures are logged and do not stop the event from being marked.
    /// Events with an unparsable start time are logged and skipped. A failure on one
    /// event is logged and the sweep continues with the next.
    ///
    /// # Arguments
    /// - `now`: Instant to compare start times against
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of events marked started
    /// - `Err(AppError)`: Listing the unstarted events failed
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let mut started = 0;

        for event in RaidEventRepository::new(self.db).get_unstarted().await? {
            match self.close_signups(event.id, now).await {
                Ok(true) => started += 1,
                Ok(false) => {}
                Err(e) => tracing::error!(
                    "Failed to close sign-ups of raid event {}: {}",
                    event.id,
                    e
                ),
            }
        }

        Ok(started)
    }

    /// Closes one event's sign-ups if it is due, holding the event's lock.
    ///
    /// The event is re-read under the lock, so an event deleted or started since it was
    /// listed is skipped.
    ///
    /// # Returns
    /// - `Ok(true)`: The event was marked started
    /// - `Ok(false)`: The event is gone, already started, not due or has no valid start
    async fn close_signups(&self, event_id: i32, now: DateTime<Utc>) -> Result<bool, AppError> {
        let _guard = self.locks.acquire(event_id).await;

        let repo = RaidEventRepository::new(self.db);
        let Some(event) = repo.get_event(event_id).await? else {
            tracing::debug!("Raid event {} was deleted before its sweep", event_id);
            return Ok(false);
        };
        if event.event_started {
            return Ok(false);
        }

        let start = match parse_event_time(&event.start_time) {
            Ok(start) => start,
            Err(e) => {
                tracing::warn!("Skipping raid event {} in lifecycle sweep: {}", event.id, e);
                return Ok(false);
            }
        };

        if start > now {
            return Ok(false);
        }

        if let Some(thread_id) = event.thread_id {
            if let Err(e) = self.host.lock_thread(thread_id).await {
                tracing::error!(
                    "Failed to lock thread {} of raid event {}: {}",
                    thread_id,
                    event.id,
                    e
                );
            }
        }

        if let Some(message_id) = event.message_id {
            if let Err(e) = self
                .host
                .strip_components(event.channel_id, message_id)
                .await
            {
                tracing::error!(
                    "Failed to remove sign-up controls of raid event {}: {}",
                    event.id,
                    e
                );
            }
        }

        repo.mark_started(event.id).await?;

        tracing::info!("Raid event {} ({}) has started", event.id, event.name);

        Ok(true)
    }
}

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        raid_event::RaidEventRepository, raid_participation::RaidParticipationRepository,
        raid_signup::RaidSignupRepository,
    },
    error::AppError,
    model::raid_event::{
        AnnouncementParams, CreateRaidEventParams, RaidEvent, UpdateRaidEventParams,
    },
    service::{
        host::{GuildHost, ScheduledEventDraft},
        signup::EventLocks,
    },
    util::time::parse_event_time,
};

/// Hours given to the scheduled event when the raid has no usable end time.
const DEFAULT_RAID_HOURS: i64 = 3;

pub struct RaidEventService<'a, H: GuildHost> {
    db: &'a DatabaseConnection,
    host: &'a H,
    locks: &'a EventLocks,
}

impl<'a, H: GuildHost> RaidEventService<'a, H> {
    pub fn new(db: &'a DatabaseConnection, host: &'a H, locks: &'a EventLocks) -> Self {
        Self { db, host, locks }
    }

    /// Creates a new raid event
    ///
    /// # Returns
    /// - `Ok(RaidEvent)`: The created event
    /// - `Err(AppError::BadRequest)`: Name or start time is blank
    pub async fn create_event(&self, mut params: CreateRaidEventParams) -> Result<RaidEvent, AppError> {
        params.name = required("name", &params.name)?;
        params.start_time = required("start time", &params.start_time)?;

        let event = RaidEventRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created raid event {} ({}) in guild {}",
            event.id,
            event.name,
            event.guild_id
        );

        Ok(event)
    }

    /// Records the posted announcement message and its thread
    pub async fn attach_announcement(&self, params: AnnouncementParams) -> Result<RaidEvent, AppError> {
        RaidEventRepository::new(self.db)
            .set_announcement(params)
            .await
    }

    /// Edits an event of the guild
    ///
    /// # Returns
    /// - `Ok(RaidEvent)`: The updated event
    /// - `Err(AppError::NotFound)`: Event doesn't exist in this guild
    /// - `Err(AppError::BadRequest)`: No field given, a blank name or start time, or a new
    ///   start time for a raid that has already started
    pub async fn update_event(
        &self,
        guild_id: u64,
        mut params: UpdateRaidEventParams,
    ) -> Result<RaidEvent, AppError> {
        if params.name.is_none()
            && params.description.is_none()
            && params.start_time.is_none()
            && params.end_time.is_none()
        {
            return Err(AppError::BadRequest("Nothing to change".to_string()));
        }

        params.name = params.name.map(|name| required("name", &name)).transpose()?;
        params.start_time = params
            .start_time
            .map(|start| required("start time", &start))
            .transpose()?;

        let event = self.get_event(guild_id, params.id).await?;
        if event.event_started && params.start_time.is_some() {
            return Err(AppError::BadRequest(
                "This raid has already started; its start time can no longer change".to_string(),
            ));
        }

        RaidEventRepository::new(self.db).save_event(params).await
    }

    /// Records or clears the native scheduled event mirroring this raid
    pub async fn link_scheduled_event(
        &self,
        guild_id: u64,
        event_id: i32,
        scheduled_event_id: Option<u64>,
    ) -> Result<RaidEvent, AppError> {
        self.get_event(guild_id, event_id).await?;

        RaidEventRepository::new(self.db)
            .set_scheduled_event(event_id, scheduled_event_id)
            .await
    }

    /// Mirrors a raid as a native Discord scheduled event and links it
    ///
    /// Raids whose start time can't be parsed or lies in the past are left without a
    /// scheduled event, as are raids whose scheduled event can't be created; both are
    /// logged. The end falls back to three hours after the start when the raid has no
    /// end time after its start.
    ///
    /// # Arguments
    /// - `event`: Freshly created raid event
    /// - `now`: Instant the start time must lie after
    ///
    /// # Returns
    /// - `Ok(RaidEvent)`: The event, linked to its scheduled event when one was created
    /// - `Err(AppError)`: Storing the link failed
    pub async fn bridge_scheduled_event(
        &self,
        event: RaidEvent,
        now: DateTime<Utc>,
    ) -> Result<RaidEvent, AppError> {
        let start = match parse_event_time(&event.start_time) {
            Ok(start) if start > now => start,
            Ok(_) => {
                tracing::debug!(
                    "Raid event {} starts in the past, no scheduled event created",
                    event.id
                );
                return Ok(event);
            }
            Err(e) => {
                tracing::debug!("No scheduled event for raid event {}: {}", event.id, e);
                return Ok(event);
            }
        };

        let end = event
            .end_time
            .as_deref()
            .and_then(|end| parse_event_time(end).ok())
            .filter(|end| *end > start)
            .unwrap_or(start + Duration::hours(DEFAULT_RAID_HOURS));

        let draft = ScheduledEventDraft {
            name: event.name.clone(),
            description: event.description.clone(),
            start,
            end,
        };

        match self.host.create_scheduled_event(event.guild_id, &draft).await {
            Ok(scheduled_event_id) => {
                self.link_scheduled_event(event.guild_id, event.id, Some(scheduled_event_id))
                    .await
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to create scheduled event for raid event {}: {}",
                    event.id,
                    e
                );
                Ok(event)
            }
        }
    }

    /// Gets an event of the guild
    ///
    /// # Returns
    /// - `Ok(RaidEvent)`: The event
    /// - `Err(AppError::NotFound)`: No such event, or it belongs to another guild
    pub async fn get_event(&self, guild_id: u64, event_id: i32) -> Result<RaidEvent, AppError> {
        RaidEventRepository::new(self.db)
            .get_event(event_id)
            .await?
            .filter(|event| event.guild_id == guild_id)
            .ok_or_else(|| AppError::NotFound(format!("Raid event {} not found", event_id)))
    }

    /// Lists the guild's events, oldest first
    pub async fn list_events(&self, guild_id: u64) -> Result<Vec<RaidEvent>, AppError> {
        RaidEventRepository::new(self.db).get_by_guild(guild_id).await
    }

    /// Deletes an event with its announcement, scheduled event and sign-ups
    ///
    /// Failures deleting the announcement or scheduled event are logged; the stored
    /// event is removed regardless.
    ///
    /// # Returns
    /// - `Ok(RaidEvent)`: The deleted event
    /// - `Err(AppError::NotFound)`: Event doesn't exist in this guild
    pub async fn delete_event(&self, guild_id: u64, event_id: i32) -> Result<RaidEvent, AppError> {
        let guard = self.locks.acquire(event_id).await;
        let event = self.get_event(guild_id, event_id).await?;

        if let Some(message_id) = event.message_id {
            if let Err(e) = self.host.delete_message(event.channel_id, message_id).await {
                tracing::error!(
                    "Failed to delete announcement of raid event {}: {}",
                    event.id,
                    e
                );
            }
        }

        if let Some(scheduled_event_id) = event.scheduled_event_id {
            if let Err(e) = self
                .host
                .delete_scheduled_event(event.guild_id, scheduled_event_id)
                .await
            {
                tracing::error!(
                    "Failed to delete scheduled event {} of raid event {}: {}",
                    scheduled_event_id,
                    event.id,
                    e
                );
            }
        }

        let txn = self.db.begin().await?;
        RaidSignupRepository::new(&txn).delete_by_event(event_id).await?;
        RaidParticipationRepository::new(&txn)
            .delete_by_event(event_id)
            .await?;
        RaidEventRepository::new(&txn).delete(event_id).await?;
        txn.commit().await?;

        drop(guard);
        self.locks.forget(event_id).await;

        tracing::info!("Deleted raid event {} ({})", event.id, event.name);

        Ok(event)
    }
}

fn required(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("The raid {} can't be empty", field)));
    }
    Ok(trimmed.to_string())
}

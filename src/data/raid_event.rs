use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::raid_event::{AnnouncementParams, CreateRaidEventParams, RaidEvent, UpdateRaidEventParams},
};

pub struct RaidEventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RaidEventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new raid event
    ///
    /// The event starts without an announcement message; see `set_announcement`.
    ///
    /// # Returns
    /// - `Ok(RaidEvent)`: The created event
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreateRaidEventParams) -> Result<RaidEvent, AppError> {
        let entity = entity::raid_event::ActiveModel {
            guild_id: ActiveValue::Set(params.guild_id.to_string()),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            channel_id: ActiveValue::Set(params.channel_id.to_string()),
            message_id: ActiveValue::Set(None),
            thread_id: ActiveValue::Set(None),
            scheduled_event_id: ActiveValue::Set(None),
            event_started: ActiveValue::Set(false),
            created_by: ActiveValue::Set(params.created_by.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RaidEvent::from_entity(entity)?)
    }

    /// Gets an event by ID
    ///
    /// # Returns
    /// - `Ok(Some(RaidEvent))`: The event if found
    /// - `Ok(None)`: No event with that ID
    /// - `Err(AppError)`: Database or conversion error
    pub async fn get_event(&self, id: i32) -> Result<Option<RaidEvent>, AppError> {
        entity::prelude::RaidEvent::find_by_id(id)
            .one(self.db)
            .await?
            .map(RaidEvent::from_entity)
            .transpose()
            .map_err(AppError::from)
    }

    /// Gets all events of a guild, oldest first
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<RaidEvent>, AppError> {
        let events = entity::prelude::RaidEvent::find()
            .filter(entity::raid_event::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::raid_event::Column::Id)
            .all(self.db)
            .await?;

        events
            .into_iter()
            .map(|event| RaidEvent::from_entity(event).map_err(AppError::from))
            .collect()
    }

    /// Gets every event across all guilds that the lifecycle sweep has not processed yet
    pub async fn get_unstarted(&self) -> Result<Vec<RaidEvent>, AppError> {
        let events = entity::prelude::RaidEvent::find()
            .filter(entity::raid_event::Column::EventStarted.eq(false))
            .order_by_asc(entity::raid_event::Column::Id)
            .all(self.db)
            .await?;

        events
            .into_iter()
            .map(|event| RaidEvent::from_entity(event).map_err(AppError::from))
            .collect()
    }

    /// Saves edits to name, description and times of an event
    ///
    /// # Returns
    /// - `Ok(RaidEvent)`: The updated event
    /// - `Err(AppError::DbErr(RecordNotFound))`: No event with that ID
    pub async fn save_event(&self, params: UpdateRaidEventParams) -> Result<RaidEvent, AppError> {
        let mut active_model = self.find_active(params.id).await?;

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(start_time) = params.start_time {
            active_model.start_time = ActiveValue::Set(start_time);
        }
        if let Some(end_time) = params.end_time {
            active_model.end_time = ActiveValue::Set(end_time);
        }

        let updated = active_model.update(self.db).await?;

        Ok(RaidEvent::from_entity(updated)?)
    }

    /// Records where the announcement for an event was posted
    pub async fn set_announcement(&self, params: AnnouncementParams) -> Result<RaidEvent, AppError> {
        let mut active_model = self.find_active(params.event_id).await?;

        active_model.channel_id = ActiveValue::Set(params.channel_id.to_string());
        active_model.message_id = ActiveValue::Set(Some(params.message_id.to_string()));
        active_model.thread_id = ActiveValue::Set(params.thread_id.map(|id| id.to_string()));

        let updated = active_model.update(self.db).await?;

        Ok(RaidEvent::from_entity(updated)?)
    }

    /// Records or clears the bridged guild scheduled event
    pub async fn set_scheduled_event(
        &self,
        id: i32,
        scheduled_event_id: Option<u64>,
    ) -> Result<RaidEvent, AppError> {
        let mut active_model = self.find_active(id).await?;

        active_model.scheduled_event_id =
            ActiveValue::Set(scheduled_event_id.map(|id| id.to_string()));

        let updated = active_model.update(self.db).await?;

        Ok(RaidEvent::from_entity(updated)?)
    }

    /// Flags an event as started so the lifecycle sweep skips it from now on
    pub async fn mark_started(&self, id: i32) -> Result<(), AppError> {
        let mut active_model = self.find_active(id).await?;
        active_model.event_started = ActiveValue::Set(true);
        active_model.update(self.db).await?;
        Ok(())
    }

    /// Deletes an event by ID
    ///
    /// # Returns
    /// - `Ok(true)`: Event deleted
    /// - `Ok(false)`: No event with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::RaidEvent::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn find_active(&self, id: i32) -> Result<entity::raid_event::ActiveModel, DbErr> {
        let event = entity::prelude::RaidEvent::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Raid event {} not found", id)))?;

        Ok(event.into())
    }
}

//! Raid event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test raid events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::raid_event::RaidEventFactory;
///
/// let event = RaidEventFactory::new(&db, "123")
///     .name("Mythic Progression")
///     .start_time("<t:1700000000:F>")
///     .build()
///     .await?;
/// ```
pub struct RaidEventFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    description: String,
    start_time: String,
    end_time: Option<String>,
    channel_id: String,
    message_id: Option<String>,
    thread_id: Option<String>,
    scheduled_event_id: Option<String>,
    event_started: bool,
    created_by: String,
}

impl<'a> RaidEventFactory<'a> {
    /// Creates a new RaidEventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Raid {id}"` where id is auto-incremented
    /// - start_time: one hour from now in RFC 3339
    /// - channel_id: `"{id}"`, no announcement, thread or scheduled event
    /// - event_started: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Discord guild ID the event belongs to
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.into(),
            name: format!("Raid {}", id),
            description: "Test raid description".to_string(),
            start_time: (Utc::now() + chrono::Duration::hours(1)).to_rfc3339(),
            end_time: None,
            channel_id: (900_000 + id).to_string(),
            message_id: None,
            thread_id: None,
            scheduled_event_id: None,
            event_started: false,
            created_by: "100".to_string(),
        }
    }

    /// Sets the event name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the start time string.
    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self
    }

    /// Sets the end time string.
    pub fn end_time(mut self, end_time: Option<String>) -> Self {
        self.end_time = end_time;
        self
    }

    /// Sets the announcement channel and message.
    pub fn announcement(
        mut self,
        channel_id: impl Into<String>,
        message_id: impl Into<String>,
    ) -> Self {
        self.channel_id = channel_id.into();
        self.message_id = Some(message_id.into());
        self
    }

    /// Sets the discussion thread.
    pub fn thread_id(mut self, thread_id: impl Into<String>) -> Self {
        self.thread_id = Some(thread_id.into());
        self
    }

    /// Sets the bridged scheduled event.
    pub fn scheduled_event_id(mut self, scheduled_event_id: impl Into<String>) -> Self {
        self.scheduled_event_id = Some(scheduled_event_id.into());
        self
    }

    /// Sets whether the lifecycle sweep already processed the event.
    pub fn event_started(mut self, event_started: bool) -> Self {
        self.event_started = event_started;
        self
    }

    /// Builds and inserts the raid event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::raid_event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::raid_event::Model, DbErr> {
        entity::raid_event::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            thread_id: ActiveValue::Set(self.thread_id),
            scheduled_event_id: ActiveValue::Set(self.scheduled_event_id),
            event_started: ActiveValue::Set(self.event_started),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a raid event with default values for the specified guild.
///
/// Shorthand for `RaidEventFactory::new(db, guild_id).build().await`.
pub async fn create_raid_event(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::raid_event::Model, DbErr> {
    RaidEventFactory::new(db, guild_id).build().await
}

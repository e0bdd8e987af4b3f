//! Domain models for raid event data operations.

use chrono::{DateTime, Utc};

use crate::{
    error::internal::InternalError,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// A scheduled raid with its announcement and bridge identifiers.
///
/// The start and end times are display strings as entered by the organizer. Only the
/// lifecycle sweep interprets the start time.
#[derive(Debug, Clone, PartialEq)]
pub struct RaidEvent {
    /// Unique identifier for the event.
    pub id: i32,
    /// Discord guild the event belongs to.
    pub guild_id: u64,
    /// Name of the raid.
    pub name: String,
    /// Free-text description shown in the announcement.
    pub description: String,
    /// Start time as entered by the organizer.
    pub start_time: String,
    /// Optional end time as entered by the organizer.
    pub end_time: Option<String>,
    /// Channel the event was created in and announced to.
    pub channel_id: u64,
    /// Announcement message carrying the sign-up controls.
    pub message_id: Option<u64>,
    /// Discussion thread opened on the announcement.
    pub thread_id: Option<u64>,
    /// Native guild scheduled event mirroring this raid.
    pub scheduled_event_id: Option<u64>,
    /// Set once the lifecycle sweep has processed the start of the event.
    pub event_started: bool,
    /// Discord user who created the event.
    pub created_by: u64,
    /// Timestamp when the event was created.
    pub created_at: DateTime<Utc>,
}

impl RaidEvent {
    /// Converts an entity model to a raid event domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(RaidEvent)` - The converted domain model
    /// - `Err(InternalError::ParseStringId)` - A stored Discord id is not a valid u64
    pub fn from_entity(entity: entity::raid_event::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(&entity.guild_id)?,
            name: entity.name,
            description: entity.description,
            start_time: entity.start_time,
            end_time: entity.end_time,
            channel_id: parse_u64_from_string(&entity.channel_id)?,
            message_id: parse_optional_u64(entity.message_id.as_deref())?,
            thread_id: parse_optional_u64(entity.thread_id.as_deref())?,
            scheduled_event_id: parse_optional_u64(entity.scheduled_event_id.as_deref())?,
            event_started: entity.event_started,
            created_by: parse_u64_from_string(&entity.created_by)?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a new raid event.
#[derive(Debug, Clone)]
pub struct CreateRaidEventParams {
    pub guild_id: u64,
    pub channel_id: u64,
    pub created_by: u64,
    pub name: String,
    pub description: String,
    pub start_time: String,
    pub end_time: Option<String>,
}

/// Parameters for updating an existing raid event.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateRaidEventParams {
    /// ID of the event to update.
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<String>,
    /// Outer Option indicates field presence, inner for nullable value.
    pub end_time: Option<Option<String>>,
}

/// Discord identifiers recorded once the announcement has been posted.
#[derive(Debug, Clone, Copy)]
pub struct AnnouncementParams {
    pub event_id: i32,
    pub channel_id: u64,
    pub message_id: u64,
    pub thread_id: Option<u64>,
}
